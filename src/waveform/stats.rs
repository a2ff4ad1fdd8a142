use std::fmt;

/// Summary of a flow-rate waveform
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformStats {
    /// Number of samples
    pub samples: usize,
    /// `t_last - t_first` in seconds
    pub duration: f64,
    /// Smallest flow rate (m³/s)
    pub min_flow: f64,
    /// Largest flow rate (m³/s)
    pub max_flow: f64,
    /// Time-averaged flow rate over the waveform (trapezoidal rule).
    /// Equals the single sample value for one-sample waveforms.
    pub mean_flow: f64,
}

impl WaveformStats {
    pub(crate) fn compute(times: &[f64], flows: &[f64]) -> Option<Self> {
        let (&first_t, &last_t) = (times.first()?, times.last()?);
        let first_flow = *flows.first()?;

        let (min_flow, max_flow) = flows
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &q| {
                (lo.min(q), hi.max(q))
            });

        let duration = last_t - first_t;
        let mean_flow = if duration > 0.0 {
            let area: f64 = times
                .windows(2)
                .zip(flows.windows(2))
                .map(|(t, q)| 0.5 * (t[1] - t[0]) * (q[0] + q[1]))
                .sum();
            area / duration
        } else {
            first_flow
        };

        Some(Self {
            samples: times.len(),
            duration,
            min_flow,
            max_flow,
            mean_flow,
        })
    }

    /// Time-averaged flow expressed in mL/min
    pub fn mean_flow_ml_per_min(&self) -> f64 {
        self.mean_flow / super::ML_PER_MIN_TO_M3_PER_S
    }
}

impl fmt::Display for WaveformStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} samples over {:.4} s, flow {:.4e}..{:.4e} m3/s (mean {:.4e} m3/s)",
            self.samples, self.duration, self.min_flow, self.max_flow, self.mean_flow
        )
    }
}
