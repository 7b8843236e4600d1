use discretize::BinError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error(transparent)]
    Bin(#[from] BinError),
    #[error("state space with {0:?} bins per dimension overflows usize")]
    Overflow(Vec<usize>),
    #[error("state key {key} out of range for {len} states")]
    KeyOutOfRange { key: usize, len: usize },
    #[error("expected {expected} bin indices, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("dimension {dim}: bin {bin} out of range for {count} bins")]
    BinOutOfRange { dim: usize, bin: usize, count: usize },
    #[error("environment emits {actual} observations but the binner has {expected} dimensions")]
    ObservationSize { expected: usize, actual: usize },
}
