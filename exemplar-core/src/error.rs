use thiserror::Error;

/// Custom error type for the Exemplar example store.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ExemplarError {
    #[error("Index out of bounds: index {index} for {len} examples")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Range out of bounds: range starting at {from_index} for {len} examples")]
    RangeOutOfBounds { from_index: usize, len: usize },

    #[error("Cannot convert example from {from} to {to}: {reason}")]
    ConversionError {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write examples: {0}")]
    Format(#[from] std::fmt::Error),
}
