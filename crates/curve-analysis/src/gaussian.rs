//! Gaussian curve as an immutable configuration value.

use serde::{Deserialize, Serialize};

/// A gaussian curve `x -> amplitude * exp(-1/2 ((x - mean)/std)^2)`.
///
/// Plain data rather than a captured closure, so it can be stored,
/// compared, and serialized alongside other configuration. Fitting
/// data against a gaussian is delegated to an external nonlinear
/// optimizer; this type only evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    /// Mean value (peak position).
    pub mean: f64,
    /// Standard deviation.
    pub std: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl Gaussian {
    /// Create a gaussian with an explicit amplitude.
    pub fn new(mean: f64, std: f64, amplitude: f64) -> Self {
        Self {
            mean,
            std,
            amplitude,
        }
    }

    /// Create a normalized gaussian (unit integral), with amplitude
    /// `1 / (std * sqrt(2 pi))`.
    pub fn normalized(mean: f64, std: f64) -> Self {
        Self {
            mean,
            std,
            amplitude: 1.0 / (std * (2.0 * std::f64::consts::PI).sqrt()),
        }
    }

    /// Evaluate the curve at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.std;
        self.amplitude * (-0.5 * z * z).exp()
    }
}
