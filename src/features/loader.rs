use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::FeatureError;

/// Conversion factor from the raw millisecond column to seconds
pub const MILLISECONDS_TO_SECONDS: f64 = 1e-3;

/// Ordered interpolation knots, time-shifted so the first sample sits at `t = 0`
///
/// Construction always validates the invariants: at least two points, equal
/// lengths, finite values and strictly increasing times.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturePointSet {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl FeaturePointSet {
    /// Build a point set from already-normalized times (seconds) and values
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, FeatureError> {
        if times.len() != values.len() {
            return Err(FeatureError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if times.len() < 2 {
            return Err(FeatureError::TooFewPoints(times.len()));
        }
        for (i, (&t, &v)) in times.iter().zip(&values).enumerate() {
            for (column, value) in [(0, t), (1, v)] {
                if !value.is_finite() {
                    return Err(FeatureError::NonFinite {
                        row: i + 1,
                        column,
                        value,
                    });
                }
            }
        }
        for (i, pair) in times.windows(2).enumerate() {
            if !(pair[1] > pair[0]) {
                return Err(FeatureError::NonMonotonicTime {
                    row: i + 2,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        Ok(Self { times, values })
    }

    /// Parse feature points from headerless `<time_ms>,<normalized_flow>` CSV
    ///
    /// Each time is converted as `(raw - raw_first) * 1e-3`, so the first entry
    /// is exactly `0.0`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FeatureError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut raw_times = Vec::new();
        let mut values = Vec::new();

        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = i + 1;

            if record.len() < 2 {
                return Err(FeatureError::MissingColumn {
                    row,
                    found: record.len(),
                });
            }

            raw_times.push(parse_field(&record, row, 0)?);
            values.push(parse_field(&record, row, 1)?);
        }

        let origin = match raw_times.first() {
            Some(&first) => first,
            None => return Err(FeatureError::TooFewPoints(0)),
        };
        let times = raw_times
            .iter()
            .map(|raw| (raw - origin) * MILLISECONDS_TO_SECONDS)
            .collect();

        let points = Self::new(times, values)?;
        debug!(
            "Parsed {} feature points spanning {:.4} s",
            points.len(),
            points.duration()
        );
        Ok(points)
    }

    /// Number of knots
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when there are no knots
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Knot times in seconds relative to the first sample
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Normalized (dimensionless) flow values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Time covered by the knots, `t_last - t_first`
    pub fn duration(&self) -> f64 {
        match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }
}

/// Load feature points from a CSV file on disk
pub fn load_feature_points<P: AsRef<Path>>(path: P) -> Result<FeaturePointSet, FeatureError> {
    let path = path.as_ref();
    debug!("Loading feature points from {}", path.display());

    let file = File::open(path)?;
    FeaturePointSet::from_reader(BufReader::new(file))
}

fn parse_field(record: &csv::StringRecord, row: usize, column: usize) -> Result<f64, FeatureError> {
    let field = record.get(column).unwrap_or_default();
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FeatureError::InvalidNumber {
            row,
            column,
            value: field.to_string(),
        }),
    }
}
