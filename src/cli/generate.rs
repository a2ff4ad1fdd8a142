use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use flowwave::pipeline::{run_pipeline, PipelineConfig};

use super::config::Config;

/// Generate a flow-rate waveform from feature points
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::from_file(&path)?.into_pipeline_config()
        }
        None => PipelineConfig::default(),
    };

    info!("flowwave - Feature Points to Flow-Rate Waveform");
    info!("===============================================");
    info!("Input:  {}", config.input_path.display());
    info!("Output: {}.csv", config.output_name.display());
    info!("Mean flow rate: {}", config.mean_flow_rate);
    info!("Conversion constant: {:e}", config.conversion_constant);
    info!("Extrapolation: {}", config.extrapolation);

    let summary = run_pipeline(&config).context("Waveform generation failed")?;

    info!("Generation complete!");
    info!("  Feature points: {}", summary.feature_points);
    if summary.extrapolated_points > 0 {
        info!("  Extrapolated grid points: {}", summary.extrapolated_points);
    }
    if let Some(stats) = &summary.stats {
        info!("  Samples: {}", stats.samples);
        info!("  Flow range: {:e} .. {:e} m3/s", stats.min_flow, stats.max_flow);
        info!(
            "  Time-averaged flow: {:e} m3/s ({:.4} mL/min)",
            stats.mean_flow,
            stats.mean_flow_ml_per_min()
        );
    }
    println!("{}", summary.output_path.display());

    Ok(())
}
