//! Axis-stacked application of fixed-rank operations.
//!
//! Many raster operations are defined for a fixed rank (a 2D average,
//! a 2D convolution, an N-D interpolation) but need to run over arrays
//! of arbitrary rank: stacks of maps indexed by time, ensemble member,
//! vertical level, and so on. [`apply_stacked`] is the single place
//! where that bookkeeping lives:
//!
//! 1. the selected operating axes are permuted to the back,
//! 2. all remaining axes are flattened into one leading stack axis,
//! 3. the operation runs once per stack index on its own slice,
//! 4. the result is un-flattened and permuted back to the original
//!    axis order.
//!
//! Values outside the operating axes are never altered; the permute,
//! reshape, and their inverses round-trip exactly. Slices are mutually
//! independent, so the loop order carries no observable state.

use ndarray::{Array, ArrayD, ArrayViewD, ArrayViewMutD, Axis, IxDyn};

use crate::axes::AxisSelection;
use crate::error::{RasterOpsError, Result};

/// Apply a fixed-rank operation across an arbitrary-rank array.
///
/// `op` is invoked once per stack index with a read view of the input
/// slice (shape = the operating axes, in selection order) and a write
/// view of the matching output slice. If the operation changes the
/// operating-axis sizes, the output slice shape must be supplied via
/// `out_shape`; otherwise it defaults to the input operating shape.
///
/// # Arguments
/// * `array` - Input array of any rank >= `op_rank`
/// * `op_rank` - Number of axes the operation acts on directly
/// * `axes` - Operating axes (negative indices allowed); `None` means
///   the trailing `op_rank` axes
/// * `out_shape` - Operating shape of each output slice, if different
///   from the input's
/// * `op` - Per-slice operation; errors abort the loop and propagate
///
/// # Returns
/// A new array in the original axis order, with each operating-axis
/// length replaced by the corresponding `out_shape` entry.
pub fn apply_stacked<F>(
    array: ArrayViewD<'_, f64>,
    op_rank: usize,
    axes: Option<&[isize]>,
    out_shape: Option<&[usize]>,
    mut op: F,
) -> Result<ArrayD<f64>>
where
    F: FnMut(ArrayViewD<'_, f64>, ArrayViewMutD<'_, f64>) -> Result<()>,
{
    let rank = array.ndim();
    let selected = AxisSelection::new(op_rank, axes).resolve(rank)?;

    // Operating axes move to the back in selection order; the rest
    // keep their relative order up front.
    let mut permutation: Vec<usize> = (0..rank).filter(|a| !selected.contains(a)).collect();
    let stack_shape: Vec<usize> = permutation.iter().map(|&a| array.shape()[a]).collect();
    permutation.extend(selected.iter().copied());

    let permuted = array.permuted_axes(permutation.clone());
    let op_shape: Vec<usize> = permuted.shape()[rank - op_rank..].to_vec();
    let out_op_shape: Vec<usize> = match out_shape {
        Some(shape) => {
            if shape.len() != op_rank {
                return Err(RasterOpsError::shape_mismatch(format!(
                    "output shape has {} axes for operation of rank {}",
                    shape.len(),
                    op_rank
                )));
            }
            shape.to_vec()
        }
        None => op_shape.clone(),
    };

    let stack_size: usize = stack_shape.iter().product();

    tracing::debug!(
        rank,
        op_rank,
        stack_size,
        op_shape = ?op_shape,
        out_op_shape = ?out_op_shape,
        "applying stacked operation"
    );

    let mut stacked_in_shape = vec![stack_size];
    stacked_in_shape.extend(&op_shape);
    let stacked = permuted
        .as_standard_layout()
        .into_owned()
        .into_shape_with_order(IxDyn(&stacked_in_shape))
        .map_err(|e| RasterOpsError::shape_mismatch(e.to_string()))?;

    let mut stacked_out_shape = vec![stack_size];
    stacked_out_shape.extend(&out_op_shape);
    let mut output: ArrayD<f64> = Array::zeros(IxDyn(&stacked_out_shape));

    for i in 0..stack_size {
        let input_slice = stacked.index_axis(Axis(0), i);
        let output_slice = output.index_axis_mut(Axis(0), i);
        op(input_slice, output_slice)?;
    }

    let mut full_out_shape = stack_shape;
    full_out_shape.extend(&out_op_shape);
    let output = output
        .into_shape_with_order(IxDyn(&full_out_shape))
        .map_err(|e| RasterOpsError::shape_mismatch(e.to_string()))?;

    let mut inverse = vec![0usize; rank];
    for (i, &p) in permutation.iter().enumerate() {
        inverse[p] = i;
    }
    Ok(output.permuted_axes(inverse).as_standard_layout().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array;

    fn identity(input: ArrayViewD<'_, f64>, mut output: ArrayViewMutD<'_, f64>) -> Result<()> {
        output.assign(&input);
        Ok(())
    }

    #[test]
    fn test_identity_round_trips_default_axes() {
        let array = Array::from_shape_fn(IxDyn(&[3, 4, 5]), |idx| {
            (idx[0] * 100 + idx[1] * 10 + idx[2]) as f64
        });
        let result = apply_stacked(array.view(), 2, None, None, identity).unwrap();
        assert_eq!(result, array);
    }

    #[test]
    fn test_identity_round_trips_leading_axes() {
        let array = Array::from_shape_fn(IxDyn(&[3, 4, 5]), |idx| {
            (idx[0] * 100 + idx[1] * 10 + idx[2]) as f64
        });
        let result = apply_stacked(array.view(), 2, Some(&[0, 1]), None, identity).unwrap();
        assert_eq!(result, array);
    }

    #[test]
    fn test_identity_round_trips_reversed_axes() {
        let array = Array::from_shape_fn(IxDyn(&[2, 3, 4, 5]), |idx| {
            (idx[0] * 1000 + idx[1] * 100 + idx[2] * 10 + idx[3]) as f64
        });
        let result = apply_stacked(array.view(), 2, Some(&[-1, 1]), None, identity).unwrap();
        // The per-slice view is transposed relative to the array, but
        // the inverse permutation puts every value back where it was.
        assert_eq!(result, array);
    }

    #[test]
    fn test_slice_sees_axes_in_selection_order() {
        let array = Array::from_shape_fn(IxDyn(&[2, 3]), |idx| (idx[0] * 10 + idx[1]) as f64);
        apply_stacked(array.view(), 2, Some(&[1, 0]), None, |slice, mut out| {
            assert_eq!(slice.shape(), &[3, 2]);
            assert_eq!(slice[[2, 1]], 12.0);
            out.assign(&slice);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_shape_changing_operation() {
        let array = Array::from_shape_fn(IxDyn(&[4, 3]), |idx| (idx[0] * 3 + idx[1]) as f64);
        // Collapse each row of length 3 to its sum; stack axis is axis 0.
        let result = apply_stacked(array.view(), 1, Some(&[1]), Some(&[1]), |slice, mut out| {
            out[[0]] = slice.sum();
            Ok(())
        })
        .unwrap();
        assert_eq!(result.shape(), &[4, 1]);
        assert_eq!(result[[0, 0]], 3.0);
        assert_eq!(result[[3, 0]], 30.0);
    }

    #[test]
    fn test_rank_equals_op_rank() {
        let array = Array::from_shape_fn(IxDyn(&[3, 3]), |idx| (idx[0] + idx[1]) as f64);
        let result = apply_stacked(array.view(), 2, None, None, identity).unwrap();
        assert_eq!(result, array);
    }

    #[test]
    fn test_op_error_propagates() {
        let array = Array::zeros(IxDyn(&[2, 2, 2]));
        let result = apply_stacked(array.view(), 2, None, None, |_, _| {
            Err(RasterOpsError::invalid_argument("boom"))
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_out_shape_rank() {
        let array = Array::zeros(IxDyn(&[2, 2, 2]));
        let result = apply_stacked(array.view(), 2, None, Some(&[2]), identity);
        assert!(result.is_err());
    }
}
