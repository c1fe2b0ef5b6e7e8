//! Axis selection for stacked operations.
//!
//! Every stacked operation acts on a fixed number of *operating axes*;
//! the remaining axes are flattened into a single stack dimension and
//! looped over. Which axes are the operating ones is described by an
//! [`AxisSelection`]: an ordered list of signed axis indices, resolved
//! and validated up front, before any numeric work starts.

use crate::error::{RasterOpsError, Result};

/// An ordered selection of operating axes for a stacked operation.
///
/// Indices may be negative, counting from the end of the shape as
/// usual. When no explicit axes are given, the selection defaults to
/// the trailing `op_rank` axes in their existing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSelection {
    op_rank: usize,
    axes: Option<Vec<isize>>,
}

impl AxisSelection {
    /// Create a selection for an operation of rank `op_rank`.
    ///
    /// `axes` of `None` means "the last `op_rank` axes".
    pub fn new(op_rank: usize, axes: Option<&[isize]>) -> Self {
        Self {
            op_rank,
            axes: axes.map(|a| a.to_vec()),
        }
    }

    /// The number of operating axes this selection describes.
    pub fn op_rank(&self) -> usize {
        self.op_rank
    }

    /// Resolve the selection against an array of rank `rank`.
    ///
    /// Normalizes negative indices, then validates that the selection
    /// has exactly `op_rank` entries, that every index lies inside the
    /// array rank, and that no axis is selected twice.
    pub fn resolve(&self, rank: usize) -> Result<Vec<usize>> {
        if self.op_rank > rank {
            return Err(RasterOpsError::shape_mismatch(format!(
                "operation of rank {} cannot be applied to array of rank {}",
                self.op_rank, rank
            )));
        }

        let resolved = match &self.axes {
            None => (rank - self.op_rank..rank).collect::<Vec<_>>(),
            Some(axes) => {
                if axes.len() != self.op_rank {
                    return Err(RasterOpsError::shape_mismatch(format!(
                        "{} axes selected for operation of rank {}",
                        axes.len(),
                        self.op_rank
                    )));
                }
                let mut resolved = Vec::with_capacity(axes.len());
                for &axis in axes {
                    let index = if axis < 0 { axis + rank as isize } else { axis };
                    if index < 0 || index as usize >= rank {
                        return Err(RasterOpsError::AxisOutOfRange { axis, rank });
                    }
                    resolved.push(index as usize);
                }
                resolved
            }
        };

        for (i, axis) in resolved.iter().enumerate() {
            if resolved[..i].contains(axis) {
                return Err(RasterOpsError::shape_mismatch(format!(
                    "axis {} selected more than once",
                    axis
                )));
            }
        }

        Ok(resolved)
    }
}
