//! # Waveform Writer
//!
//! Serializes a flow-rate waveform as two labeled CSV columns:
//!
//! ```text
//! t,flow
//! 0.0,0.0
//! 0.5,3.3333333333333335e-8
//! 1.0,0.0
//! ```
//!
//! Times are in seconds and flow rates in m³/s. Floats are written in their
//! shortest round-trip form, so rerunning the pipeline with identical inputs
//! reproduces the file byte for byte.

mod csv_io;
mod error;

#[cfg(test)]
mod tests;

pub use csv_io::{
    output_file_path, read_flow_rate_data, save_flow_rate_data, write_flow_rate_data,
    OUTPUT_EXTENSION,
};
pub use error::WriterError;
