use thiserror::Error;

use crate::dims::Pos;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}, both must be odd and at least 3")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("invalid endpoint {0:?}, it must be an open cell inside the grid")]
    InvalidEndpoint(Pos),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid tile value {value} at {pos:?}, expected 0 (open) or 1 (wall)")]
    InvalidTile { pos: Pos, value: u8 },
}
