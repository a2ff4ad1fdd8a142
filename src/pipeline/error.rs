use std::path::PathBuf;

use crate::features::FeatureError;
use crate::grid::GridError;
use crate::interpolate::InterpolationError;
use crate::waveform::WaveformError;
use crate::writer::WriterError;

/// Errors that abort a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Feature points could not be loaded or failed validation
    #[error("Failed to load feature points from {path}: {source}")]
    Load {
        /// Feature file that was being loaded
        path: PathBuf,
        /// Underlying loader error
        #[source]
        source: FeatureError,
    },

    /// Invalid grid parameters
    #[error("Invalid time grid: {0}")]
    Grid(#[from] GridError),

    /// Fitting or evaluating the interpolant failed
    #[error("Interpolation failed: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Scaled series could not be assembled
    #[error("Waveform assembly failed: {0}")]
    Waveform(#[from] WaveformError),

    /// Output could not be written
    #[error("Failed to write waveform to {path}: {source}")]
    Write {
        /// Output file that was being written
        path: PathBuf,
        /// Underlying writer error
        #[source]
        source: WriterError,
    },
}
