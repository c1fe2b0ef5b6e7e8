//! Boolean mask dilation with a circular footprint.
//!
//! A mask cell becomes true when it lies within a circular radius of
//! some originally-true cell. The dilation is implemented as a 2D
//! convolution against a circular kernel followed by a `> 0`
//! threshold, stacked over any non-spatial axes.
//!
//! Boundary convention: the convolution zero-pads outside the slice,
//! so dilation is clipped at array edges. An edge cell can only turn
//! true from true cells actually inside the array.

use ndarray::{Array2, ArrayD, ArrayView2, ArrayViewD, Axis, Ix2};

use crate::error::{RasterOpsError, Result};
use crate::stack::apply_stacked;

/// Build an `n x n` circular kernel.
///
/// Cell `(i, j)` is 1 when `(i - (n-1)/2)^2 + (j - (n-1)/2)^2` is at
/// most `(n/2)^2`, else 0. The center formula works for even and odd
/// `n` alike.
pub fn circle_kernel(n: usize) -> Array2<f64> {
    let center = (n as f64 - 1.0) / 2.0;
    let radius_sq = (n as f64 / 2.0).powi(2);
    Array2::from_shape_fn((n, n), |(i, j)| {
        let di = i as f64 - center;
        let dj = j as f64 - center;
        if di * di + dj * dj <= radius_sq {
            1.0
        } else {
            0.0
        }
    })
}

/// 2D direct convolution, same output shape as the input.
///
/// The kernel anchor sits at element `(kh / 2, kw / 2)`; values
/// outside the input are treated as zero.
pub fn convolve_same(slice: ArrayView2<'_, f64>, kernel: ArrayView2<'_, f64>) -> Array2<f64> {
    let (height, width) = slice.dim();
    let (kh, kw) = kernel.dim();
    let (oy, ox) = (kh as isize / 2, kw as isize / 2);

    Array2::from_shape_fn((height, width), |(i, j)| {
        let mut acc = 0.0;
        for a in 0..kh {
            // Convolution flips the kernel relative to the input
            let y = i as isize + oy - a as isize;
            if y < 0 || y >= height as isize {
                continue;
            }
            for b in 0..kw {
                let x = j as isize + ox - b as isize;
                if x < 0 || x >= width as isize {
                    continue;
                }
                acc += kernel[[a, b]] * slice[[y as usize, x as usize]];
            }
        }
        acc
    })
}

/// Dilate a boolean mask by `n_neighbors` cells in every direction.
///
/// The two operating axes default to the trailing axes; remaining axes
/// are stacked and looped over. A cell of the result is true when it
/// lies within the circular footprint of radius `n_neighbors` of some
/// true cell of the input, clipped at array edges (zero-pad boundary).
pub fn dilate(
    mask: ArrayViewD<'_, bool>,
    n_neighbors: usize,
    axes: Option<&[isize]>,
) -> Result<ArrayD<bool>> {
    let kernel = circle_kernel(2 * n_neighbors + 1);
    let numeric = mask.mapv(|m| if m { 1.0 } else { 0.0 });

    let convolved = apply_stacked(numeric.view(), 2, axes, None, |slice, mut out| {
        let slice = slice
            .into_dimensionality::<Ix2>()
            .map_err(|e| RasterOpsError::shape_mismatch(e.to_string()))?;
        out.assign(&convolve_same(slice, kernel.view()));
        Ok(())
    })?;

    Ok(convolved.mapv(|v| v > 0.0))
}

/// Check that every leading-axis slice of a boolean stack equals the
/// first one.
pub fn masks_consistent(mask: ArrayViewD<'_, bool>) -> bool {
    if mask.ndim() == 0 || mask.shape()[0] < 2 {
        return true;
    }
    let first = mask.index_axis(Axis(0), 0);
    mask.axis_iter(Axis(0)).skip(1).all(|slice| slice == first)
}
