//! Closed-form least-squares regression and correlation.

use crate::error::{CurveAnalysisError, Result};

/// Result of a least-squares linear fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Sum of squared residuals, normalized by `sum(y^2)`: 0 for an
    /// exact fit.
    pub residual: f64,
}

/// Least-squares linear regression.
///
/// With `fixed_intercept` the line is forced through the origin and
/// only the slope is fitted. Degenerate inputs (constant x, empty
/// data) yield NaN coefficients rather than an error, consistent with
/// floating-point semantics.
pub fn linear_fit(x: &[f64], y: &[f64], fixed_intercept: bool) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(CurveAnalysisError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let n = x.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_x2 += xi * xi;
        sum_y2 += yi * yi;
    }

    let free = if fixed_intercept { 0.0 } else { 1.0 };
    let slope = (n * sum_xy - free * sum_x * sum_y) / (n * sum_x2 - free * sum_x * sum_x);
    let intercept = free * (sum_y * sum_x2 - sum_x * sum_xy) / (n * sum_x2 - sum_x * sum_x);

    // Expansion of sum((y - slope*x - intercept)^2) / sum(y^2)
    let residual = (sum_y2 + slope * slope * sum_x2 + n * intercept * intercept
        + 2.0 * slope * intercept * sum_x
        - 2.0 * slope * sum_xy
        - 2.0 * intercept * sum_y)
        / sum_y2;

    Ok(LinearFit {
        slope,
        intercept,
        residual,
    })
}

/// Pearson correlation coefficient between `x` and `y`.
///
/// NaN when either input has zero variance.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(CurveAnalysisError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sum_xy += dx * dy;
        sum_x2 += dx * dx;
        sum_y2 += dy * dy;
    }

    Ok(sum_xy / (sum_x2 * sum_y2).sqrt())
}
