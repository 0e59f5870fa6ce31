use thiserror::Error;

/// Failures raised by the reversal engines and their configuration.
///
/// Every variant is detected before an engine touches the destination buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReverseError {
    #[error("buffer length mismatch: source has {src} bytes, destination has {dst}")]
    LengthMismatch { src: usize, dst: usize },

    #[error("depth ceiling must be a positive integer, got {0}")]
    InvalidCeiling(i64),

    #[error("trial count must be a positive integer, got {0}")]
    InvalidTrialCount(i64),

    #[error(
        "depth ceiling exceeded available stack: {projected} live frames projected, budget is {budget}"
    )]
    StackBudgetExceeded { projected: usize, budget: usize },
}

pub type Result<T> = std::result::Result<T, ReverseError>;
