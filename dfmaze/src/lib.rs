//! Perfect maze generation and path search on a wall/open grid.
//!
//! A maze is built in three steps: [`build_grid`] lays out the skeleton, a
//! [`MazeCarver`](algorithms::MazeCarver) opens connectors until every chamber is reachable, and
//! [`find_path`] searches the finished grid. [`generate_maze`] does the first two at once.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod grid;

pub use algorithms::{find_path, generate_maze, Generator};
pub use dims::{Dims, Pos};
pub use error::MazeError;
pub use grid::{Grid, Tile};

/// Builds the uncarved skeleton of a maze, see [`Grid::build`].
pub fn build_grid(width: i32, height: i32) -> Result<Grid, MazeError> {
    Grid::build(width, height)
}
