// error.rs - Error taxonomy for grid construction and configuration

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("survival rate must be a number in [0, 1], got {0}")]
    InvalidSurvivalRate(f64),

    #[error("cell ({row}, {col}) lies outside a {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("pattern '{name}' does not fit in a {height}x{width} grid")]
    PatternTooLarge {
        name: &'static str,
        height: usize,
        width: usize,
    },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}
