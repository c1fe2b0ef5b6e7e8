//! Error types for curve analysis.

use thiserror::Error;

/// Errors that can occur during curve analysis.
#[derive(Error, Debug)]
pub enum CurveAnalysisError {
    /// The search window contains no crossing of the target value.
    #[error("no crossing of the target inside window [{t1}, {t2}]")]
    CrossingNotFound { t1: usize, t2: usize },

    /// Paired inputs have different lengths.
    #[error("input lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Invalid argument value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CurveAnalysisError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for curve analysis operations.
pub type Result<T> = std::result::Result<T, CurveAnalysisError>;
