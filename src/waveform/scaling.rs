use super::{WaveformError, WaveformStats};

/// mL/min expressed in m³/s
pub const ML_PER_MIN_TO_M3_PER_S: f64 = 1e-6 / 60.0;

/// Physical scaling applied to the normalized curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowScaling {
    /// Target mean flow, in the working units (mL/min by default)
    pub mean_flow_rate: f64,
    /// Factor from working units to m³/s
    pub conversion_constant: f64,
}

impl Default for FlowScaling {
    fn default() -> Self {
        Self {
            mean_flow_rate: 2.0,
            conversion_constant: ML_PER_MIN_TO_M3_PER_S,
        }
    }
}

impl FlowScaling {
    /// Scale one normalized value
    #[inline]
    pub fn apply(&self, normalized: f64) -> f64 {
        self.mean_flow_rate * normalized * self.conversion_constant
    }
}

/// Elementwise `mean_flow_rate * value * conversion_constant`
pub fn scale_flow(normalized: &[f64], scaling: &FlowScaling) -> Vec<f64> {
    normalized.iter().map(|&v| scaling.apply(v)).collect()
}

/// Time series of volumetric flow rate in m³/s
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRateWaveform {
    times: Vec<f64>,
    flow_rates: Vec<f64>,
}

impl FlowRateWaveform {
    /// Pair grid times with flow rates one-to-one
    pub fn new(times: Vec<f64>, flow_rates: Vec<f64>) -> Result<Self, WaveformError> {
        if times.len() != flow_rates.len() {
            return Err(WaveformError::LengthMismatch {
                times: times.len(),
                flows: flow_rates.len(),
            });
        }
        Ok(Self { times, flow_rates })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when the waveform has no samples
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample times in seconds
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Flow rates in m³/s
    pub fn flow_rates(&self) -> &[f64] {
        &self.flow_rates
    }

    /// Iterate over `(time, flow)` pairs
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.flow_rates.iter().copied())
    }

    /// Summary statistics, `None` for an empty waveform
    pub fn stats(&self) -> Option<WaveformStats> {
        WaveformStats::compute(&self.times, &self.flow_rates)
    }
}
