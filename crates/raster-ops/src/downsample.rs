//! Spatial downsampling by area-weighted averaging.
//!
//! Reduces the resolution of gridded data onto a coarser coordinate
//! grid. Each output cell takes the average of the input cells it
//! overlaps, weighted by the overlapping coordinate-interval area, so
//! the result is independent of how the input cells happen to line up
//! with the output cells.

use ndarray::{Array2, ArrayD, ArrayView2, ArrayViewD};

use crate::error::{RasterOpsError, Result};
use crate::stack::apply_stacked;

/// Downsample the two operating axes of an array by area-weighted
/// averaging.
///
/// Operating axes are taken in `(y, x)` row/column order: `axes[0]`
/// pairs with `y_in`/`y_out` and `axes[1]` with `x_in`/`x_out`. All
/// coordinate sequences must be strictly increasing cell centers; the
/// input sequences must match the operating-axis lengths. Remaining
/// axes are stacked and looped over.
///
/// Output cells with no overlapping input cell would come out
/// non-finite from the averaging; those are replaced with 0 as an
/// explicit, localized recovery.
pub fn downsample_average(
    array: ArrayViewD<'_, f64>,
    x_in: &[f64],
    y_in: &[f64],
    x_out: &[f64],
    y_out: &[f64],
    axes: Option<&[isize]>,
) -> Result<ArrayD<f64>> {
    check_increasing("x_in", x_in)?;
    check_increasing("y_in", y_in)?;
    check_increasing("x_out", x_out)?;
    check_increasing("y_out", y_out)?;

    let weights_y = overlap_weights(y_in, y_out);
    let weights_x = overlap_weights(x_in, x_out);
    let out_shape = [y_out.len(), x_out.len()];

    let mut result = apply_stacked(array, 2, axes, Some(&out_shape), |slice, mut out| {
        if slice.shape() != [y_in.len(), x_in.len()] {
            return Err(RasterOpsError::shape_mismatch(format!(
                "slice shape {:?} does not match coordinates ({}, {})",
                slice.shape(),
                y_in.len(),
                x_in.len()
            )));
        }
        let slice = slice
            .into_dimensionality::<ndarray::Ix2>()
            .map_err(|e| RasterOpsError::shape_mismatch(e.to_string()))?;
        let averaged = area_weighted_average(&weights_y, &weights_x, slice);
        out.assign(&averaged);
        Ok(())
    })?;

    result.mapv_inplace(|v| if v.is_finite() { v } else { 0.0 });
    Ok(result)
}

/// Per-output-cell overlap weights along one axis.
///
/// Coordinates are cell centers; cell edges sit at the midpoints
/// between neighboring centers, with the end cells extended by half a
/// spacing (a single-point axis gets a unit-width cell). Each entry
/// lists the `(input_index, overlap_length)` pairs with non-zero
/// overlap for one output cell.
pub(crate) fn overlap_weights(coords_in: &[f64], coords_out: &[f64]) -> Vec<Vec<(usize, f64)>> {
    let edges_in = cell_edges(coords_in);
    let edges_out = cell_edges(coords_out);

    coords_out
        .iter()
        .enumerate()
        .map(|(j, _)| {
            let (lo, hi) = (edges_out[j], edges_out[j + 1]);
            let mut weights = Vec::new();
            for i in 0..coords_in.len() {
                let overlap = edges_in[i + 1].min(hi) - edges_in[i].max(lo);
                if overlap > 0.0 {
                    weights.push((i, overlap));
                }
            }
            weights
        })
        .collect()
}

/// Cell edges for a strictly increasing sequence of cell centers.
fn cell_edges(coords: &[f64]) -> Vec<f64> {
    let n = coords.len();
    if n == 1 {
        return vec![coords[0] - 0.5, coords[0] + 0.5];
    }
    let mut edges = Vec::with_capacity(n + 1);
    edges.push(coords[0] - (coords[1] - coords[0]) / 2.0);
    for i in 1..n {
        edges.push((coords[i - 1] + coords[i]) / 2.0);
    }
    edges.push(coords[n - 1] + (coords[n - 1] - coords[n - 2]) / 2.0);
    edges
}

/// Area-weighted average of one 2D slice.
///
/// An output cell with zero total weight yields NaN (0/0); the caller
/// decides how to recover.
fn area_weighted_average(
    weights_y: &[Vec<(usize, f64)>],
    weights_x: &[Vec<(usize, f64)>],
    slice: ArrayView2<'_, f64>,
) -> Array2<f64> {
    Array2::from_shape_fn((weights_y.len(), weights_x.len()), |(jy, jx)| {
        let mut acc = 0.0;
        let mut total = 0.0;
        for &(iy, wy) in &weights_y[jy] {
            for &(ix, wx) in &weights_x[jx] {
                let w = wy * wx;
                acc += w * slice[[iy, ix]];
                total += w;
            }
        }
        acc / total
    })
}

fn check_increasing(name: &str, coords: &[f64]) -> Result<()> {
    if coords.is_empty() {
        return Err(RasterOpsError::invalid_argument(format!(
            "{} must not be empty",
            name
        )));
    }
    if coords.windows(2).any(|w| w[1] <= w[0]) {
        return Err(RasterOpsError::invalid_argument(format!(
            "{} must be strictly increasing",
            name
        )));
    }
    Ok(())
}
