use thiserror::Error;

use crate::geom::Cell;

/// Errors raised while building an [`OccupancyGrid`](crate::OccupancyGrid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid occupancy value {value} at {cell}, expected 0 or 1")]
    InvalidBit { cell: Cell, value: u8 },

    #[error("invalid layout character \u{201c}{ch}\u{201d} at {cell}")]
    InvalidChar { ch: char, cell: Cell },
}
