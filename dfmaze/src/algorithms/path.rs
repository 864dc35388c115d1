use hashbrown::{HashMap, HashSet};

use crate::{dims::Pos, error::MazeError, grid::Grid};

/// Finds a path from `start` to `end` using depth first search.
///
/// The search stops at the first time it reaches `end`, so the path is not necessarily the
/// shortest one. Neighbors are pushed in the order of [`Pos::NEIGHBORS`], which makes the result
/// depend only on the grid.
///
/// Returns `Ok(None)` when `end` is unreachable and [`MazeError::InvalidEndpoint`] when either
/// endpoint is not an open cell of the grid.
pub fn find_path(grid: &Grid, start: Pos, end: Pos) -> Result<Option<Vec<Pos>>, MazeError> {
    for pos in [start, end] {
        if !grid.is_open(pos) {
            return Err(MazeError::InvalidEndpoint(pos));
        }
    }

    // Entries carry the cell they were pushed from, parents are recorded once a cell is
    // expanded, which is exactly the path the entry would have carried.
    let mut stack: Vec<(Pos, Option<Pos>)> = vec![(start, None)];
    let mut parents = HashMap::new();
    let mut visited = HashSet::new();

    while let Some((current, parent)) = stack.pop() {
        if current == end {
            let path = rebuild_path(&parents, parent, end);
            log::debug!(
                "path {:?} -> {:?} found, {} cells, {} visited",
                start,
                end,
                path.len(),
                visited.len()
            );
            return Ok(Some(path));
        }

        if !visited.insert(current) {
            continue;
        }
        if let Some(parent) = parent {
            parents.insert(current, parent);
        }

        for offset in Pos::NEIGHBORS {
            let next = current + offset;
            if grid.is_open(next) && !visited.contains(&next) {
                stack.push((next, Some(current)));
            }
        }
    }

    log::debug!("no path {:?} -> {:?}, {} visited", start, end, visited.len());
    Ok(None)
}

fn rebuild_path(parents: &HashMap<Pos, Pos>, parent: Option<Pos>, end: Pos) -> Vec<Pos> {
    let mut path = vec![end];
    let mut current = parent;
    while let Some(pos) = current {
        path.push(pos);
        current = parents.get(&pos).copied();
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::algorithms::{DepthFirstSearch, MazeCarver as _, Random};

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows.iter().map(|row| row.iter().copied())).unwrap()
    }

    fn assert_valid(grid: &Grid, path: &[Pos], start: Pos, end: Pos) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert!(path.iter().all(|&pos| grid.is_open(pos)));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
    }

    #[test]
    fn known_path() {
        let grid = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 0, 0]]);
        let path = find_path(&grid, Pos(0, 0), Pos(2, 2)).unwrap();
        assert_eq!(
            path,
            Some(vec![Pos(0, 0), Pos(1, 0), Pos(2, 0), Pos(2, 1), Pos(2, 2)])
        );
    }

    #[test]
    fn no_path() {
        let grid = grid(&[&[0, 1, 1], &[1, 1, 1], &[1, 1, 0]]);
        assert_eq!(find_path(&grid, Pos(0, 0), Pos(2, 2)), Ok(None));

        let grid = self::grid(&[&[0, 1, 0], &[1, 1, 0], &[0, 0, 0]]);
        assert_eq!(find_path(&grid, Pos(0, 0), Pos(1, 2)), Ok(None));
    }

    #[test]
    fn not_the_shortest() {
        let grid = grid(&[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
        let path = find_path(&grid, Pos(0, 0), Pos(0, 1)).unwrap().unwrap();
        assert_eq!(
            path,
            vec![
                Pos(0, 0),
                Pos(1, 0),
                Pos(2, 0),
                Pos(2, 1),
                Pos(1, 1),
                Pos(0, 1)
            ]
        );
    }

    #[test]
    fn start_is_end() {
        let grid = grid(&[&[0, 1], &[1, 0]]);
        assert_eq!(find_path(&grid, Pos(1, 1), Pos(1, 1)), Ok(Some(vec![Pos(1, 1)])));
    }

    #[test]
    fn even_sized_grid() {
        let grid = grid(&[&[0, 1, 0, 0], &[0, 1, 0, 1], &[0, 0, 0, 1], &[1, 1, 0, 0]]);
        let (start, end) = (Pos(0, 0), Pos(3, 3));
        let path = find_path(&grid, start, end).unwrap().unwrap();
        assert_valid(&grid, &path, start, end);
    }

    #[test]
    fn invalid_endpoints() {
        let grid = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 0, 0]]);
        assert_eq!(
            find_path(&grid, Pos(0, 1), Pos(2, 2)),
            Err(MazeError::InvalidEndpoint(Pos(0, 1)))
        );
        assert_eq!(
            find_path(&grid, Pos(0, 0), Pos(3, 0)),
            Err(MazeError::InvalidEndpoint(Pos(3, 0)))
        );
        assert_eq!(
            find_path(&grid, Pos(0, 0), Pos(1, 1)),
            Err(MazeError::InvalidEndpoint(Pos(1, 1)))
        );
        assert_eq!(
            find_path(&grid, Pos(-1, 0), Pos(0, 0)),
            Err(MazeError::InvalidEndpoint(Pos(-1, 0)))
        );
    }

    #[test]
    fn carved_maze_paths() {
        let mut rng = Random::seed_from_u64(3);
        let maze = DepthFirstSearch.carve(Grid::build(41, 31).unwrap(), &mut rng);
        let before = maze.clone();

        let (start, end) = maze.default_endpoints();
        let path = find_path(&maze, start, end).unwrap().unwrap();
        assert_valid(&maze, &path, start, end);

        // in a perfect maze the path is unique, so it can't revisit a cell
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());

        let back = find_path(&maze, end, start).unwrap().unwrap();
        assert_eq!(back.into_iter().rev().collect::<Vec<_>>(), path);

        assert_eq!(maze, before);
    }
}
