/// Errors that can occur while writing or reading waveform CSV files
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV serialization or parsing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Time and flow series differ in length
    #[error("Length mismatch: {times} time samples but {flows} flow samples")]
    LengthMismatch {
        /// Number of time samples
        times: usize,
        /// Number of flow samples
        flows: usize,
    },

    /// A waveform read back from disk is malformed
    #[error("Invalid waveform data: {0}")]
    InvalidData(String),
}

impl From<crate::waveform::WaveformError> for WriterError {
    fn from(err: crate::waveform::WaveformError) -> Self {
        match err {
            crate::waveform::WaveformError::LengthMismatch { times, flows } => {
                WriterError::LengthMismatch { times, flows }
            }
        }
    }
}
