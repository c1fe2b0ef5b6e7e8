//! Helpers for working with sampled coordinate sequences.

use serde::{Deserialize, Serialize};

use crate::error::{CurveAnalysisError, Result};

/// Which neighbor to pick when a value falls between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Closest sample to the left.
    Left,
    /// Closest sample to the right.
    Right,
    /// Whichever is closer; ties take the smaller index.
    #[default]
    Closest,
}

/// Index of the sample in an ascending sequence closest to `value`.
///
/// Values outside the sequence clamp to the first or last index.
pub fn closest_index(sorted: &[f64], value: f64, location: Location) -> Result<usize> {
    if sorted.is_empty() {
        return Err(CurveAnalysisError::invalid_argument(
            "sequence must not be empty",
        ));
    }

    // First index with sorted[pos] >= value
    let pos = sorted.partition_point(|&v| v < value);
    if pos == 0 {
        return Ok(0);
    }
    if pos == sorted.len() {
        return Ok(sorted.len() - 1);
    }

    Ok(match location {
        Location::Closest => {
            if value - sorted[pos - 1] <= sorted[pos] - value {
                pos - 1
            } else {
                pos
            }
        }
        Location::Left => {
            if value == sorted[pos] {
                pos
            } else {
                pos - 1
            }
        }
        Location::Right => pos,
    })
}

/// `n` unevenly spaced values over `[min, max]`, denser toward the
/// middle of the range.
///
/// A sinh warp of a uniform grid; `slope` controls how strongly the
/// spacing concentrates (larger means denser center).
pub fn nonlinspace(n: usize, min: f64, max: f64, slope: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![min];
    }

    let warped_min = (-slope).sinh();
    let warped_max = slope.sinh();
    (0..n)
        .map(|i| {
            let x = -1.0 + 2.0 * i as f64 / (n as f64 - 1.0);
            let y = (slope * x).sinh();
            (y - warped_min) * (max - min) / (warped_max - warped_min) + min
        })
        .collect()
}
