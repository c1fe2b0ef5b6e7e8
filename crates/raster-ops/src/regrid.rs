//! Grid-to-grid resampling for regular (Cartesian) source grids.
//!
//! The source grid is implicit: per-axis `{min, max}` limits paired
//! with the array's own length along that axis, uniform spacing
//! implied. The destination grid is the outer product of explicit 1D
//! target coordinate sequences. Regridding maps every requested
//! physical coordinate to a fractional pixel index with an affine
//! transform, then evaluates the source slice there with a separately
//! owned interpolation primitive. The affine mapper and the
//! interpolator are composed, not coupled; either can be reused on its
//! own.

use ndarray::{ArrayD, ArrayViewD, Dimension};
use serde::{Deserialize, Serialize};

use crate::error::{RasterOpsError, Result};
use crate::stack::apply_stacked;

/// Coordinate extent of one source-grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    /// Create limits for one axis.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a physical coordinate to a fractional pixel index on an
    /// axis of `n` samples.
    ///
    /// Degenerate limits (`max == min`) produce a non-finite index,
    /// which the interpolator turns into the fill value.
    pub fn to_pixel(&self, coord: f64, n: usize) -> f64 {
        (coord - self.min) * (n as f64 - 1.0) / (self.max - self.min)
    }
}

/// Interpolation order for regridding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpOrder {
    /// Order 0: nearest sample (preserves exact values).
    Nearest,
    /// Order 1: piecewise-linear in every regridded axis.
    #[default]
    Linear,
}

/// Options for [`regrid`].
#[derive(Debug, Clone, Copy)]
pub struct RegridOptions {
    /// Interpolation order, defaults to piecewise-linear.
    pub order: InterpOrder,
    /// Value for destination points outside the source grid.
    pub fill_value: f64,
}

impl Default for RegridOptions {
    fn default() -> Self {
        Self {
            order: InterpOrder::Linear,
            fill_value: f64::NAN,
        }
    }
}

/// Resample data from its implicit regular grid onto target grids.
///
/// `limits` holds one `{min, max}` pair per regridded axis and
/// `targets` one destination coordinate sequence per regridded axis;
/// `targets[i]` pairs with `axes[i]`. Remaining axes are stacked and
/// looped over. The output keeps every axis in its original position,
/// with each regridded axis length replaced by the matching target
/// length.
///
/// # Errors
/// `ShapeMismatch` when `limits` and `targets` disagree in count or
/// the regridded-axis count exceeds the array rank, before any
/// numeric work begins.
pub fn regrid(
    data: ArrayViewD<'_, f64>,
    limits: &[AxisLimits],
    targets: &[&[f64]],
    axes: Option<&[isize]>,
    options: RegridOptions,
) -> Result<ArrayD<f64>> {
    if limits.len() != targets.len() {
        return Err(RasterOpsError::shape_mismatch(format!(
            "{} limit pairs for {} target grids",
            limits.len(),
            targets.len()
        )));
    }
    let op_rank = targets.len();
    if op_rank > data.ndim() {
        return Err(RasterOpsError::shape_mismatch(format!(
            "cannot regrid {} axes of array of rank {}",
            op_rank,
            data.ndim()
        )));
    }

    let out_shape: Vec<usize> = targets.iter().map(|t| t.len()).collect();

    tracing::debug!(
        op_rank,
        in_shape = ?data.shape(),
        out_shape = ?out_shape,
        order = ?options.order,
        "regridding"
    );

    apply_stacked(data, op_rank, axes, Some(&out_shape), |slice, mut out| {
        // Fractional pixel index of every target coordinate, per axis.
        let pixel: Vec<Vec<f64>> = limits
            .iter()
            .zip(targets)
            .enumerate()
            .map(|(a, (lim, target))| {
                let n = slice.shape()[a];
                target.iter().map(|&c| lim.to_pixel(c, n)).collect()
            })
            .collect();

        let mut coords = vec![0.0; op_rank];
        for (idx, value) in out.indexed_iter_mut() {
            for (a, &i) in idx.slice().iter().enumerate() {
                coords[a] = pixel[a][i];
            }
            *value = interpolate_at(&slice, &coords, options.order, options.fill_value);
        }
        Ok(())
    })
}

/// Evaluate an N-D slice at one fractional pixel coordinate tuple.
///
/// Coordinates outside `[0, n - 1]` on any axis (including non-finite
/// ones) yield `fill_value`. Order 0 rounds to the nearest sample;
/// order 1 blends the `2^k` surrounding corners.
pub fn interpolate_at(
    slice: &ArrayViewD<'_, f64>,
    coords: &[f64],
    order: InterpOrder,
    fill_value: f64,
) -> f64 {
    let shape = slice.shape();
    debug_assert_eq!(coords.len(), shape.len());

    for (a, &p) in coords.iter().enumerate() {
        if !p.is_finite() || p < 0.0 || p > shape[a] as f64 - 1.0 {
            return fill_value;
        }
    }

    match order {
        InterpOrder::Nearest => {
            let idx: Vec<usize> = coords.iter().map(|&p| p.round() as usize).collect();
            slice[idx.as_slice()]
        }
        InterpOrder::Linear => {
            let rank = coords.len();
            let lower: Vec<usize> = coords.iter().map(|&p| p.floor() as usize).collect();
            let frac: Vec<f64> = coords
                .iter()
                .zip(&lower)
                .map(|(&p, &lo)| p - lo as f64)
                .collect();

            let mut acc = 0.0;
            let mut idx = vec![0usize; rank];
            for corner in 0..(1usize << rank) {
                let mut weight = 1.0;
                for a in 0..rank {
                    if corner >> a & 1 == 1 {
                        idx[a] = (lower[a] + 1).min(shape[a] - 1);
                        weight *= frac[a];
                    } else {
                        idx[a] = lower[a];
                        weight *= 1.0 - frac[a];
                    }
                }
                if weight != 0.0 {
                    acc += weight * slice[idx.as_slice()];
                }
            }
            acc
        }
    }
}
