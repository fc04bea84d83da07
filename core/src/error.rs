use thiserror::Error;

/// Errors raised by the maze core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Too few rows or columns to hold the origin cell (1, 1), or too many
    /// to address with `i32` coordinates
    #[error(
        "invalid maze dimensions {rows}x{cols}: both must be between {min} and {max}",
        min = crate::MIN_DIMENSION,
        max = crate::MAX_DIMENSION
    )]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("malformed grid data: {0}")]
    MalformedGrid(String),

    #[error("invalid move direction {0}: must be 0 (north), 1 (east), 2 (south) or 3 (west)")]
    InvalidDirection(u8),
}

pub type Result<T> = std::result::Result<T, MazeError>;
