/// Errors from assembling a waveform
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaveformError {
    /// Time and flow series differ in length
    #[error("Length mismatch: {times} time samples but {flows} flow samples")]
    LengthMismatch {
        /// Number of time samples
        times: usize,
        /// Number of flow samples
        flows: usize,
    },
}
