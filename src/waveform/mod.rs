//! # Flow-Rate Waveform
//!
//! Rescales the dimensionless interpolated curve into a physical volumetric
//! flow rate and holds the resulting `(time, flow)` series.
//!
//! ```text
//! flow[i] = mean_flow_rate * normalized[i] * conversion_constant
//! ```
//!
//! With the reference configuration the mean flow rate is given in mL/min and
//! [`ML_PER_MIN_TO_M3_PER_S`] converts it to m³/s.

mod error;
mod scaling;
mod stats;

#[cfg(test)]
mod tests;

pub use error::WaveformError;
pub use scaling::{scale_flow, FlowRateWaveform, FlowScaling, ML_PER_MIN_TO_M3_PER_S};
pub use stats::WaveformStats;
