use std::fmt;
use std::path::PathBuf;

use log::{debug, info, warn};

use super::{PipelineConfig, PipelineError};
use crate::features::{load_feature_points, FeaturePointSet};
use crate::grid::TimeGrid;
use crate::interpolate::{Extrapolation, PchipInterpolator};
use crate::waveform::{scale_flow, FlowRateWaveform, FlowScaling, WaveformStats};
use crate::writer::{output_file_path, save_flow_rate_data};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// File that was written
    pub output_path: PathBuf,
    /// Number of feature points loaded
    pub feature_points: usize,
    /// Grid points outside the feature-point domain
    pub extrapolated_points: usize,
    /// Statistics of the written waveform
    pub stats: Option<WaveformStats>,
}

impl fmt::Display for PipelineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} from {} feature points",
            self.output_path.display(),
            self.feature_points
        )?;
        if let Some(stats) = &self.stats {
            write!(f, ": {}", stats)?;
        }
        Ok(())
    }
}

/// Interpolate `points` on `grid` and scale the result to physical flow
///
/// Pure transform with no I/O.
pub fn generate_waveform(
    points: &FeaturePointSet,
    grid: &TimeGrid,
    scaling: &FlowScaling,
    extrapolation: Extrapolation,
) -> Result<FlowRateWaveform, PipelineError> {
    let interpolator =
        PchipInterpolator::new(points.times(), points.values())?.with_extrapolation(extrapolation);
    let normalized = interpolator.evaluate_many(grid.times())?;
    let flow_rates = scale_flow(&normalized, scaling);

    Ok(FlowRateWaveform::new(grid.times().to_vec(), flow_rates)?)
}

/// Load, interpolate, scale and write according to `config`
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineSummary, PipelineError> {
    info!("Loading feature points: {}", config.input_path.display());
    let points = load_feature_points(&config.input_path).map_err(|source| PipelineError::Load {
        path: config.input_path.clone(),
        source,
    })?;
    info!(
        "  {} feature points over {:.4} s",
        points.len(),
        points.duration()
    );

    let grid = TimeGrid::from_spec(&config.grid())?;
    info!(
        "Time grid: {} samples, t = {}..{} s, dt = {} s",
        grid.len(),
        config.t0,
        config.tf,
        config.dt
    );

    let (min, max) = match (points.times().first(), points.times().last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => (0.0, 0.0),
    };
    let extrapolated_points = grid
        .times()
        .iter()
        .filter(|&&t| t < min || t > max)
        .count();
    if extrapolated_points > 0 && config.extrapolation != Extrapolation::Error {
        warn!(
            "{} grid points lie outside the feature-point domain [{}, {}] s; applying '{}' policy",
            extrapolated_points, min, max, config.extrapolation
        );
    }

    let scaling = config.scaling();
    debug!(
        "Scaling: mean flow {} x conversion {:e}",
        scaling.mean_flow_rate, scaling.conversion_constant
    );
    let waveform = generate_waveform(&points, &grid, &scaling, config.extrapolation)?;

    let output_path = save_flow_rate_data(
        &config.output_name,
        waveform.times(),
        waveform.flow_rates(),
    )
    .map_err(|source| PipelineError::Write {
        path: output_file_path(&config.output_name),
        source,
    })?;

    let summary = PipelineSummary {
        output_path,
        feature_points: points.len(),
        extrapolated_points,
        stats: waveform.stats(),
    };
    info!("{}", summary);

    Ok(summary)
}
