use thiserror::Error;

/// Errors raised when constructing model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Year range where the start year follows the end year.
    #[error("invalid year range: start {start} is after end {end}")]
    InvalidYearRange { start: i32, end: i32 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
