use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use super::WriterError;
use crate::waveform::FlowRateWaveform;

/// Extension appended to every output name
pub const OUTPUT_EXTENSION: &str = "csv";

/// One output row; field names double as the CSV header
#[derive(Debug, Serialize, Deserialize)]
struct FlowRow {
    t: f64,
    flow: f64,
}

/// Path written for `output_name`: the name with `.csv` appended
///
/// The extension is appended rather than substituted, so dotted base names
/// such as `run.v2` become `run.v2.csv`.
pub fn output_file_path<P: AsRef<Path>>(output_name: P) -> PathBuf {
    let mut name = OsString::from(output_name.as_ref().as_os_str());
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

/// Write `t,flow` rows to any writer
pub fn write_flow_rate_data<W: Write>(
    writer: W,
    times: &[f64],
    flow_rates: &[f64],
) -> Result<(), WriterError> {
    if times.len() != flow_rates.len() {
        return Err(WriterError::LengthMismatch {
            times: times.len(),
            flows: flow_rates.len(),
        });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    if times.is_empty() {
        csv_writer.write_record(["t", "flow"])?;
    }
    for (&t, &flow) in times.iter().zip(flow_rates) {
        csv_writer.serialize(FlowRow { t, flow })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Create (or overwrite) `<output_name>.csv` and write the waveform into it
///
/// Returns the path of the written file.
pub fn save_flow_rate_data<P: AsRef<Path>>(
    output_name: P,
    times: &[f64],
    flow_rates: &[f64],
) -> Result<PathBuf, WriterError> {
    let path = output_file_path(output_name);
    debug!("Writing {} samples to {}", times.len(), path.display());

    let file = File::create(&path)?;
    write_flow_rate_data(BufWriter::new(file), times, flow_rates)?;
    Ok(path)
}

/// Read a waveform previously written by [`save_flow_rate_data`]
pub fn read_flow_rate_data<P: AsRef<Path>>(path: P) -> Result<FlowRateWaveform, WriterError> {
    let file = File::open(path.as_ref())?;
    read_from(BufReader::new(file))
}

pub(crate) fn read_from<R: Read>(reader: R) -> Result<FlowRateWaveform, WriterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.get(0) != Some("t") || headers.get(1) != Some("flow") {
        return Err(WriterError::InvalidData(format!(
            "expected header 't,flow', found '{}'",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut times = Vec::new();
    let mut flows = Vec::new();
    for row in csv_reader.deserialize() {
        let row: FlowRow = row?;
        times.push(row.t);
        flows.push(row.flow);
    }

    Ok(FlowRateWaveform::new(times, flows)?)
}
