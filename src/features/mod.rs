//! # Feature Point Loading
//!
//! Feature points are the sparse `(time, normalized flow)` knots digitized from a
//! published reference waveform. They are stored as headerless two-column CSV:
//!
//! ```text
//! 112,0.42
//! 160,1.00
//! 245,0.61
//! ```
//!
//! The first column is a raw timestamp in milliseconds, the second the
//! dimensionless flow value. On load the time column is shifted so that the
//! first row becomes the time origin and converted to seconds.

mod error;
mod loader;

#[cfg(test)]
mod tests;

pub use error::FeatureError;
pub use loader::{load_feature_points, FeaturePointSet, MILLISECONDS_TO_SECONDS};
