use anyhow::{Context, Result};
use std::path::PathBuf;

use flowwave::writer::read_flow_rate_data;

/// Display information about a generated waveform file
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let waveform = read_flow_rate_data(&file)
        .with_context(|| format!("Failed to read waveform: {}", file.display()))?;

    println!("Flow-Rate Waveform Information");
    println!("==============================");
    println!("File: {}", file.display());
    println!();

    let Some(stats) = waveform.stats() else {
        println!("No samples.");
        return Ok(());
    };

    println!("Samples: {}", stats.samples);
    if let (Some(first), Some(last)) = (waveform.times().first(), waveform.times().last()) {
        println!("Time span: {} .. {} s ({:.4} s)", first, last, stats.duration);
    }
    println!("Min flow: {:e} m3/s", stats.min_flow);
    println!("Max flow: {:e} m3/s", stats.max_flow);
    println!(
        "Time-averaged flow: {:e} m3/s ({:.4} mL/min)",
        stats.mean_flow,
        stats.mean_flow_ml_per_min()
    );

    Ok(())
}
