use rand::{seq::SliceRandom as _, Rng as _};

use super::{MazeCarver, Random};

use crate::{
    array::Array2D,
    dims::{Dims, Pos},
    grid::{Grid, Tile},
};

/// Randomized depth first search, also known as the recursive backtracker.
///
/// The walk keeps its own stack of [`Frame`]s instead of recursing, so it can carve mazes of any
/// size without running out of call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

/// One step of the walk: the cell, its neighbors in shuffled order and how many of them were
/// already handled.
#[derive(Debug)]
struct Frame {
    cell: Dims,
    neighbors: [Dims; 4],
    next: usize,
}

/// Visited cells in logical space with one extra row and column that are always visited.
///
/// Neighbors at `-1` wrap onto the extra row/column, same as the ones right past the edge, so
/// probing never needs a bounds check.
struct Visited {
    cells: Array2D<bool>,
    size: Dims,
}

impl Visited {
    fn new(size: Dims) -> Self {
        let Dims(w, h) = size;
        let mut cells = Array2D::new(false, w as usize + 1, h as usize + 1);
        for x in 0..=w {
            cells[Dims(x, h)] = true;
        }
        for y in 0..=h {
            cells[Dims(w, y)] = true;
        }

        Self { cells, size }
    }

    fn guarded(&self, cell: Dims) -> Dims {
        Dims(
            cell.0.rem_euclid(self.size.0 + 1),
            cell.1.rem_euclid(self.size.1 + 1),
        )
    }

    fn contains(&self, cell: Dims) -> bool {
        self.cells[self.guarded(cell)]
    }

    fn insert(&mut self, cell: Dims) {
        let cell = self.guarded(cell);
        self.cells[cell] = true;
    }
}

/// Number of logical cells, counted in `usize` so huge grids don't overflow `i32`.
fn cell_count(size: Dims) -> usize {
    size.0.max(0) as usize * size.1.max(0) as usize
}

impl DepthFirstSearch {
    /// Connector between two neighboring logical cells.
    pub fn wall_between(cell: Dims, other: Dims) -> Pos {
        let (Dims(x, y), Dims(xx, yy)) = (cell, other);
        if x == xx {
            Pos(y.max(yy) * 2, x * 2 + 1)
        } else {
            Pos(y * 2 + 1, x.max(xx) * 2)
        }
    }

    fn enter(cell: Dims, visited: &mut Visited, rng: &mut Random) -> Frame {
        visited.insert(cell);

        let mut neighbors = Dims::NEIGHBORS.map(|offset| cell + offset);
        neighbors.shuffle(rng);

        Frame {
            cell,
            neighbors,
            next: 0,
        }
    }
}

impl MazeCarver for DepthFirstSearch {
    fn carve(&self, mut grid: Grid, rng: &mut Random) -> Grid {
        let size = grid.logical_size();
        if size.0 <= 0 || size.1 <= 0 {
            log::warn!("nothing to carve in a {}x{} grid", grid.width(), grid.height());
            return grid;
        }

        let mut visited = Visited::new(size);
        let start = Dims(rng.gen_range(0..size.0), rng.gen_range(0..size.1));
        log::debug!("carving {:?} logical cells from {:?}", size, start);

        let mut stack = Vec::with_capacity(cell_count(size));
        stack.push(Self::enter(start, &mut visited, rng));

        let mut opened = 0usize;
        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.neighbors.len() {
                // every neighbor handled, backtrack
                stack.pop();
                continue;
            }

            let (current, next) = (frame.cell, frame.neighbors[frame.next]);
            frame.next += 1;

            if visited.contains(next) {
                continue;
            }

            let wall = Self::wall_between(current, next);
            log::trace!("opening {:?} between {:?} and {:?}", wall, current, next);
            grid.set(wall, Tile::Open);
            opened += 1;

            stack.push(Self::enter(next, &mut visited, rng));
        }

        log::debug!("carving done, {} connectors opened", opened);

        grid
    }
}
