//! Zero-crossing search and cursor location on sampled curves.
//!
//! [`find_bracket`] runs a bounded bisection over the centered signal
//! `sample[i] - target` and returns the lower index of the length-1
//! bracket straddling the sign change. [`locate_cursor`] builds on it
//! to find the exact curve position crossing a pointer value, with
//! linear interpolation inside the located bracket.
//!
//! The signal must be monotonic inside the search window for the
//! crossing to be unique; on non-monotonic input, bisection finds one
//! of the crossings, not necessarily a specific one.

use crate::error::{CurveAnalysisError, Result};

/// Default cap on bisection steps.
///
/// Bisection halves the window each step, so this is a termination
/// safeguard rather than something a well-formed window ever reaches.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Search window and iteration bound for [`find_bracket`].
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Lower window index.
    pub t1: usize,
    /// Upper window index; `None` means the last sample.
    pub t2: Option<usize>,
    /// Bisection step cap, overridable.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            t1: 0,
            t2: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Find the index `t` such that `signal` crosses `target` between
/// samples `t` and `t + 1`.
///
/// Bisection keeps the half-window whose endpoints differ in sign,
/// with an exact zero counting as positive. The window shrinks
/// monotonically, so the loop terminates well inside the iteration
/// cap for any real window.
///
/// # Errors
/// `InvalidArgument` for a malformed window (needs `t1 < t2` within
/// the signal). `CrossingNotFound` when the final window does not
/// straddle the target: bisection on a non-crossing window ends on an
/// arbitrary bracket, and that is reported instead of returned.
pub fn find_bracket(signal: &[f64], target: f64, config: SearchConfig) -> Result<usize> {
    let n = signal.len();
    if n < 2 {
        return Err(CurveAnalysisError::invalid_argument(
            "signal needs at least two samples",
        ));
    }

    let mut t1 = config.t1;
    let mut t2 = config.t2.unwrap_or(n - 1);
    if t2 >= n || t1 >= t2 {
        return Err(CurveAnalysisError::invalid_argument(format!(
            "search window [{}, {}] invalid for {} samples",
            t1, t2, n
        )));
    }

    let centered: Vec<f64> = signal.iter().map(|s| s - target).collect();
    // Zero counts as positive; a literal product test would trip over
    // IEEE -0.0 here.
    let positive = |v: f64| v >= 0.0;

    let mut steps = 0;
    while t2 - t1 > 1 && steps < config.max_iterations {
        steps += 1;
        let t3 = (t1 + t2) / 2;
        if positive(centered[t3]) == positive(centered[t2]) {
            t2 = t3;
        } else {
            t1 = t3;
        }
    }

    let (lo, hi) = (centered[t1], centered[t2]);
    if lo == 0.0 || hi == 0.0 || (lo < 0.0) != (hi < 0.0) {
        Ok(t1)
    } else {
        Err(CurveAnalysisError::CrossingNotFound { t1, t2 })
    }
}

/// Options for [`locate_cursor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorOptions {
    /// Lower search bound, given as an x-domain value.
    pub window_min: Option<f64>,
    /// Upper search bound, given as an x-domain value.
    pub window_max: Option<f64>,
    /// Swap the roles of x and y: point at an x value instead.
    pub swap_axes: bool,
}

/// Return the x coordinate at which the curve `(x, y)` crosses the
/// `pointer` value.
///
/// Window bounds are x-domain values, mapped to sample indices by
/// bisection against `x` itself. The crossing bracket is then located
/// in `y` and the exact position linearly interpolated inside it.
/// With `swap_axes`, x and y trade places and the result is a y
/// coordinate.
pub fn locate_cursor(x: &[f64], y: &[f64], pointer: f64, options: CursorOptions) -> Result<f64> {
    if x.len() != y.len() {
        return Err(CurveAnalysisError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let (x, y) = if options.swap_axes { (y, x) } else { (x, y) };

    let t1 = match options.window_min {
        Some(bound) => find_bracket(x, bound, SearchConfig::default())?,
        None => 0,
    };
    let t2 = match options.window_max {
        Some(bound) => Some(find_bracket(x, bound, SearchConfig::default())?),
        None => None,
    };

    let t = find_bracket(
        y,
        pointer,
        SearchConfig {
            t1,
            t2,
            ..Default::default()
        },
    )?;

    let slope = (y[t + 1] - y[t]) / (x[t + 1] - x[t]);
    Ok((pointer - y[t]) / slope + x[t])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_bracket_simple_crossing() {
        let signal = [-3.0, -1.0, 1.0, 3.0];
        let t = find_bracket(&signal, 0.0, SearchConfig::default()).unwrap();
        assert_eq!(t, 1);
    }

    #[test]
    fn test_find_bracket_exact_sample_hit() {
        let signal = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let t = find_bracket(&signal, 0.0, SearchConfig::default()).unwrap();
        assert!(t == 1 || t == 2, "got {}", t);
    }

    #[test]
    fn test_find_bracket_nonzero_target() {
        let signal: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let t = find_bracket(&signal, 42.5, SearchConfig::default()).unwrap();
        assert_eq!(t, 42);
    }

    #[test]
    fn test_find_bracket_descending_signal() {
        let signal = [5.0, 3.0, 1.0, -1.0, -3.0];
        let t = find_bracket(&signal, 0.0, SearchConfig::default()).unwrap();
        assert_eq!(t, 2);
    }

    #[test]
    fn test_find_bracket_restricted_window() {
        // Two crossings; the window picks the second one.
        let signal = [-1.0, 1.0, 1.0, 1.0, -1.0, -1.0];
        let config = SearchConfig {
            t1: 2,
            ..Default::default()
        };
        let t = find_bracket(&signal, 0.0, config).unwrap();
        assert_eq!(t, 3);
    }

    #[test]
    fn test_find_bracket_no_crossing() {
        let signal = [1.0, 2.0, 3.0, 4.0];
        let result = find_bracket(&signal, 0.0, SearchConfig::default());
        assert!(matches!(
            result,
            Err(CurveAnalysisError::CrossingNotFound { .. })
        ));
    }

    #[test]
    fn test_find_bracket_bad_window() {
        let signal = [1.0, 2.0, 3.0];
        let config = SearchConfig {
            t1: 2,
            t2: Some(1),
            ..Default::default()
        };
        assert!(find_bracket(&signal, 2.5, config).is_err());

        let config = SearchConfig {
            t2: Some(7),
            ..Default::default()
        };
        assert!(find_bracket(&signal, 2.5, config).is_err());
    }

    #[test]
    fn test_find_bracket_iteration_cap_still_validates() {
        let signal: Vec<f64> = (0..1000).map(|i| i as f64 - 500.0).collect();
        // A cap of 1 leaves a wide window, but it still straddles.
        let config = SearchConfig {
            max_iterations: 1,
            ..Default::default()
        };
        let t = find_bracket(&signal, 0.0, config).unwrap();
        assert!(t < 999);
    }

    #[test]
    fn test_locate_cursor_linear_curve() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 2.0, 3.0];
        let pos = locate_cursor(&x, &y, 1.5, CursorOptions::default()).unwrap();
        assert!((pos - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_locate_cursor_interpolates_within_bracket() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 10.0, 20.0];
        let pos = locate_cursor(&x, &y, 2.5, CursorOptions::default()).unwrap();
        assert!((pos - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_locate_cursor_swapped_axes() {
        let x = [0.0, 2.0, 4.0, 6.0];
        let y = [0.0, 1.0, 2.0, 3.0];
        let options = CursorOptions {
            swap_axes: true,
            ..Default::default()
        };
        // Pointing at x = 3 returns the matching y value.
        let pos = locate_cursor(&x, &y, 3.0, options).unwrap();
        assert!((pos - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_locate_cursor_window_bounds() {
        // Rising then falling; restrict to the falling flank.
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 2.0, 4.0, 2.0, 0.0];
        let options = CursorOptions {
            window_min: Some(2.0),
            ..Default::default()
        };
        let pos = locate_cursor(&x, &y, 1.0, options).unwrap();
        assert!((pos - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_locate_cursor_length_mismatch() {
        let x = [0.0, 1.0];
        let y = [0.0, 1.0, 2.0];
        assert!(locate_cursor(&x, &y, 0.5, CursorOptions::default()).is_err());
    }
}
