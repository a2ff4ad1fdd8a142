//! # flowwave - Blood-Flow Waveform Generator
//!
//! `flowwave` turns a handful of digitized waveform feature points into a densely
//! sampled volumetric flow-rate waveform, ready to be used as an inlet boundary
//! condition in CFD simulations.
//!
//! ## Key Features
//!
//! - **Shape-Preserving Interpolation**: Monotonic piecewise cubic Hermite (PCHIP)
//!   interpolation never overshoots between feature points, so the resampled
//!   waveform keeps the shape of the published reference.
//!
//! - **Physical Scaling**: The dimensionless curve is rescaled by a target mean
//!   flow rate and a unit conversion constant (mL/min to m³/s by default).
//!
//! - **Validated Input**: Feature files are checked at load time (numeric fields,
//!   at least two points, strictly increasing time) and fail with descriptive
//!   typed errors.
//!
//! - **Explicit Extrapolation Policy**: Grid points outside the feature-point time
//!   domain are extrapolated, clamped or rejected, as configured.
//!
//! - **Deterministic Output**: Reruns with identical inputs produce byte-identical
//!   CSV files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowwave::pipeline::{run_pipeline, Artery, DatasetPaths, PipelineConfig};
//!
//! let paths = DatasetPaths {
//!     artery: Artery::Cca,
//!     ..DatasetPaths::default()
//! };
//! let config = PipelineConfig::default().with_dataset(&paths);
//!
//! let summary = run_pipeline(&config)?;
//! println!("{}", summary);
//! # Ok::<(), flowwave::pipeline::PipelineError>(())
//! ```
//!
//! ## In-Memory Usage
//!
//! ```rust
//! use flowwave::features::FeaturePointSet;
//! use flowwave::grid::TimeGrid;
//! use flowwave::interpolate::Extrapolation;
//! use flowwave::pipeline::generate_waveform;
//! use flowwave::waveform::FlowScaling;
//!
//! let points = FeaturePointSet::new(vec![0.0, 0.5, 1.0], vec![0.0, 1.0, 0.0])?;
//! let grid = TimeGrid::new(0.0, 1.0, 0.25)?;
//! let waveform = generate_waveform(
//!     &points,
//!     &grid,
//!     &FlowScaling::default(),
//!     Extrapolation::Error,
//! )?;
//! assert_eq!(waveform.len(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`features`]: Feature point loading and validation
//! - [`grid`]: Uniform time grid generation
//! - [`interpolate`]: PCHIP interpolation and extrapolation policy
//! - [`waveform`]: Physical scaling and waveform statistics
//! - [`writer`]: `t,flow` CSV output
//! - [`pipeline`]: Configuration and the load → interpolate → scale → write driver
//!
//! ## File Formats
//!
//! | File | Header | Columns |
//! |------|--------|---------|
//! | Feature points | none | raw time (ms), normalized flow |
//! | Waveform | `t,flow` | time (s), flow rate (m³/s) |

// Documentation lints - every public item is documented
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod features;
pub mod grid;
pub mod interpolate;
pub mod pipeline;
pub mod waveform;
pub mod writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::features::{load_feature_points, FeatureError, FeaturePointSet};
    pub use crate::grid::{GridError, TimeGrid};
    pub use crate::interpolate::{
        interpolate_features, Extrapolation, InterpolationError, PchipInterpolator,
    };
    pub use crate::pipeline::{run_pipeline, Artery, PipelineConfig, PipelineError};
    pub use crate::waveform::{scale_flow, FlowRateWaveform, FlowScaling};
    pub use crate::writer::{save_flow_rate_data, WriterError};
}
