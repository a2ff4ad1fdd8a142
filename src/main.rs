//! # flowwave
//!
//! Command-line driver that turns digitized waveform feature points into a
//! densely sampled flow-rate waveform CSV.
//!
//! ## Usage
//!
//! ```bash
//! # Reference configuration (ECA feature points, 0..1 s at 0.1 ms)
//! flowwave generate
//!
//! # Override constants and artery from a config file
//! flowwave -v generate --config flowwave.toml
//!
//! # Summarize a generated waveform
//! flowwave info Hoi-OlderAdults-Waveform_ECA.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
