mod depth_first_search;
mod path;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{error::MazeError, grid::Grid};
pub use depth_first_search::DepthFirstSearch;
pub use path::find_path;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Turns the skeleton from [`Grid::build`] into a maze by opening connectors.
pub trait MazeCarver: fmt::Debug {
    fn carve(&self, grid: Grid, rng: &mut Random) -> Grid;
}

/// Builds and carves mazes from a single seed, so the same seed always yields the same maze.
#[derive(Debug)]
pub struct Generator {
    seed: u64,
    carver: Box<dyn MazeCarver>,
}

impl Generator {
    /// Uses [`DepthFirstSearch`], a seed is drawn from entropy when `None` is passed.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_carver(seed, Box::new(DepthFirstSearch))
    }

    pub fn with_carver(seed: Option<u64>, carver: Box<dyn MazeCarver>) -> Self {
        Self {
            seed: seed.unwrap_or_else(|| thread_rng().gen()),
            carver,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&self, width: i32, height: i32) -> Result<Grid, MazeError> {
        let grid = Grid::build(width, height)?;
        let mut rng = Random::seed_from_u64(self.seed);

        log::debug!(
            "generating {}x{} maze with {:?}, seed {}",
            width,
            height,
            self.carver,
            self.seed
        );

        Ok(self.carver.carve(grid, &mut rng))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Generates a perfect maze of the given odd dimensions with a random seed.
pub fn generate_maze(width: i32, height: i32) -> Result<Grid, MazeError> {
    Generator::new(None).generate(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims::Pos;

    #[derive(Debug)]
    struct Untouched;

    impl MazeCarver for Untouched {
        fn carve(&self, grid: Grid, _: &mut Random) -> Grid {
            grid
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = Generator::new(Some(42)).generate(31, 21).unwrap();
        let b = Generator::new(Some(42)).generate(31, 21).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        // 3 seeds colliding on a 41x41 maze is practically impossible
        let mazes: Vec<_> = [1, 2, 3]
            .into_iter()
            .map(|seed| Generator::new(Some(seed)).generate(41, 41).unwrap())
            .collect();
        assert!(mazes[0] != mazes[1] || mazes[1] != mazes[2]);
    }

    #[test]
    fn generator_uses_its_carver() {
        let generator = Generator::with_carver(Some(7), Box::new(Untouched));
        assert_eq!(generator.seed(), 7);
        assert_eq!(generator.generate(5, 5), Grid::build(5, 5));
    }

    #[test]
    fn generate_maze_validates_dimensions() {
        assert_eq!(
            generate_maze(10, 11),
            Err(MazeError::InvalidDimensions {
                width: 10,
                height: 11
            })
        );

        let maze = generate_maze(11, 11).unwrap();
        let (start, end) = maze.default_endpoints();
        assert!(find_path(&maze, start, end).unwrap().is_some());
        assert!(maze.is_open(Pos(1, 1)));
    }
}
