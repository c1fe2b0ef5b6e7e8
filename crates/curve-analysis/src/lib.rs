//! Convenience analysis routines for sampled curves and coordinates.
//!
//! - **Zero-crossing search** ([`find_bracket`]) and **cursor
//!   location** ([`locate_cursor`]): bounded bisection over a
//!   discretely sampled signal, with linear interpolation inside the
//!   located bracket.
//! - **Gaussian** ([`Gaussian`]): an immutable curve description with
//!   a pure `evaluate`.
//! - **Regression** ([`linear_fit`], [`pearson_correlation`]):
//!   closed-form least squares and correlation.
//! - **Geometry** ([`line_box_intersections`],
//!   [`segment_box_intersections`]): elementary box clipping.
//! - **Formatting** ([`format_latlon`]): hemisphere-suffixed
//!   coordinate strings.
//! - **Sampling helpers** ([`closest_index`], [`nonlinspace`]).
//!
//! Everything is synchronous and stateless; numeric degeneracies
//! propagate as NaN rather than erroring, while structural problems
//! (bad windows, mismatched lengths) fail fast.

pub mod cursor;
pub mod error;
pub mod gaussian;
pub mod geometry;
pub mod latlon;
pub mod regression;
pub mod sampling;

// Re-export commonly used items at crate root
pub use cursor::{
    find_bracket, locate_cursor, CursorOptions, SearchConfig, DEFAULT_MAX_ITERATIONS,
};
pub use error::{CurveAnalysisError, Result};
pub use gaussian::Gaussian;
pub use geometry::{line_box_intersections, segment_box_intersections, Point};
pub use latlon::{format_latlon, LatLonFormat};
pub use regression::{linear_fit, pearson_correlation, LinearFit};
pub use sampling::{closest_index, nonlinspace, Location};
