//! # Waveform Pipeline
//!
//! Runs the four stages once, in order, each consuming its predecessor's output:
//!
//! ```text
//! feature CSV ──load──▶ FeaturePointSet ──PCHIP on TimeGrid──▶ normalized curve
//!             ──scale──▶ FlowRateWaveform ──write──▶ <output>.csv
//! ```
//!
//! All parameters live in [`PipelineConfig`]; nothing is read from global state.

mod config;
mod error;
mod run;


pub use config::{Artery, DatasetPaths, PipelineConfig};
pub use error::PipelineError;
pub use run::{generate_waveform, run_pipeline, PipelineSummary};
