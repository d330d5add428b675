use thiserror::Error;

/// Errors raised by board construction and tile queries.
///
/// Blocked moves are not errors; they are reported as `false`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board needs at least one column and one row, got {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },
    #[error("tile ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },
}
