use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod generate;
mod info;

/// flowwave - Blood-Flow Waveform Generator
#[derive(Parser)]
#[command(name = "flowwave")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate feature points into a scaled flow-rate waveform
    Generate {
        /// Load settings from a TOML config file (reference defaults otherwise)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Display information about a generated waveform CSV
    Info {
        /// Waveform CSV file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate { config } => generate::run(config),
        Commands::Info { file } => info::run(file),
    }
}
