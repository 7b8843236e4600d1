use tensor::TensorError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BinError {
    #[error("dimension {dim}: value {value} is below range [{low}, {high})")]
    OutOfRangeLow {
        dim: usize,
        value: f32,
        low: f32,
        high: f32,
    },
    #[error("dimension {dim}: value {value} is at or above range [{low}, {high})")]
    OutOfRangeHigh {
        dim: usize,
        value: f32,
        low: f32,
        high: f32,
    },
    #[error("dimension {dim}: value is NaN")]
    NotANumber { dim: usize },
    #[error("expected {expected} dimensions, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("type coercion failed: {0}")]
    TypeCoercionFailure(#[from] TensorError),
    #[error("dimension {dim}: {reason}")]
    InvalidAxis { dim: usize, reason: String },
    #[error("binner needs at least one dimension")]
    NoDimensions,
}

impl BinError {
    /// Dimension the error refers to, when it refers to a single one.
    #[must_use]
    pub fn dim(&self) -> Option<usize> {
        match self {
            BinError::OutOfRangeLow { dim, .. }
            | BinError::OutOfRangeHigh { dim, .. }
            | BinError::NotANumber { dim }
            | BinError::InvalidAxis { dim, .. } => Some(*dim),
            BinError::DimensionMismatch { .. }
            | BinError::TypeCoercionFailure(_)
            | BinError::NoDimensions => None,
        }
    }
}
