//! # Shape-Preserving Interpolation
//!
//! Piecewise cubic Hermite interpolation (PCHIP) through the waveform feature
//! points. Knot derivatives follow Fritsch & Carlson (1980) with the weighted
//! harmonic mean of Fritsch & Butland (1984) at interior knots and the
//! three-point, shape-preserving end condition at the boundaries. The result
//! is C1 continuous and never overshoots between knots, so monotonic runs of
//! feature points stay monotonic after resampling.
//!
//! ## Extrapolation
//!
//! Evaluating outside `[t_first, t_last]` is governed by [`Extrapolation`]:
//!
//! | Policy | Behavior |
//! |--------|----------|
//! | `Extrapolate` | Continue the cubic of the nearest end interval (default) |
//! | `Clamp` | Hold the first/last knot value |
//! | `Error` | Reject the target with [`InterpolationError::OutOfDomain`] |

mod error;
mod pchip;


pub use error::InterpolationError;
pub use pchip::{interpolate_features, Extrapolation, PchipInterpolator};
