//! Rank-N raster operations for gridded geophysical data.
//!
//! This crate provides one generic engine and three consumers of it:
//!
//! - **Axis-stacked apply** ([`apply_stacked`]): run a fixed-rank
//!   operation across an arbitrary-rank array by selecting operating
//!   axes, flattening the rest into a stack axis, and looping.
//! - **Downsampling** ([`downsample_average`]): area-weighted
//!   averaging onto a coarser coordinate grid.
//! - **Mask dilation** ([`dilate`]): grow boolean regions by a
//!   circular footprint via convolution and thresholding.
//! - **Regridding** ([`regrid`]): resample a regular Cartesian grid
//!   onto arbitrary target coordinates through an affine
//!   coordinate-to-pixel map and an N-D interpolator.
//!
//! All arrays are fully resident `ndarray` arrays with value
//! semantics; the crate does no I/O and keeps no state between calls.
//!
//! # Example
//!
//! ```
//! use ndarray::{Array, IxDyn};
//! use raster_ops::{regrid, AxisLimits, RegridOptions};
//!
//! // A stack of three 4x4 maps, resampled to 4x8 each.
//! let data = Array::zeros(IxDyn(&[3, 4, 4]));
//! let limits = [AxisLimits::new(0.0, 3.0), AxisLimits::new(0.0, 3.0)];
//! let rows: Vec<f64> = (0..4).map(|i| i as f64).collect();
//! let cols: Vec<f64> = (0..8).map(|i| i as f64 * 3.0 / 7.0).collect();
//!
//! let result = regrid(
//!     data.view(),
//!     &limits,
//!     &[&rows, &cols],
//!     None,
//!     RegridOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(result.shape(), &[3, 4, 8]);
//! ```

pub mod axes;
pub mod downsample;
pub mod error;
pub mod mask;
pub mod regrid;
pub mod stack;

// Re-export commonly used items at crate root
pub use axes::AxisSelection;
pub use downsample::downsample_average;
pub use error::{RasterOpsError, Result};
pub use mask::{circle_kernel, convolve_same, dilate, masks_consistent};
pub use regrid::{interpolate_at, regrid, AxisLimits, InterpOrder, RegridOptions};
pub use stack::apply_stacked;
