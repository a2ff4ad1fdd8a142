/// Errors that can occur while loading waveform feature points
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// I/O error opening or reading the feature file
    #[error("Failed to read feature file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// A row has fewer than the two required columns
    #[error("Row {row} has {found} column(s), expected at least 2 (time, normalized flow)")]
    MissingColumn {
        /// 1-based row number
        row: usize,
        /// Columns present on that row
        found: usize,
    },

    /// A field could not be parsed as a finite number
    #[error("Row {row}, column {column}: invalid numeric value {value:?}")]
    InvalidNumber {
        /// 1-based row number
        row: usize,
        /// 0-based column index
        column: usize,
        /// Offending field text
        value: String,
    },

    /// A time or value is NaN or infinite after normalization
    #[error("Row {row}, column {column}: value {value} is not finite")]
    NonFinite {
        /// 1-based row number
        row: usize,
        /// 0-based column index
        column: usize,
        /// Offending value
        value: f64,
    },

    /// Fewer points than interpolation requires
    #[error("Feature file contains {0} point(s), at least 2 are required")]
    TooFewPoints(usize),

    /// Time column is not strictly increasing
    #[error("Time column must be strictly increasing: row {row} has {current} after {previous}")]
    NonMonotonicTime {
        /// 1-based row number of the offending sample
        row: usize,
        /// Time of the preceding row
        previous: f64,
        /// Time of the offending row
        current: f64,
    },

    /// Time and value sequences differ in length
    #[error("Length mismatch: {times} time values but {values} flow values")]
    LengthMismatch {
        /// Number of time values
        times: usize,
        /// Number of flow values
        values: usize,
    },
}
