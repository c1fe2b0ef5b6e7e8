//! Error types for raster operations.

use thiserror::Error;

/// Errors that can occur during raster operations.
#[derive(Error, Debug)]
pub enum RasterOpsError {
    /// Axis or grid counts disagree with the array shape.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// An axis index lies beyond the array rank.
    #[error("axis {axis} is out of range for array of rank {rank}")]
    AxisOutOfRange { axis: isize, rank: usize },

    /// Invalid argument value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RasterOpsError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterOpsError>;
