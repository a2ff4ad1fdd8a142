//! Uniform time grid on which the interpolant is resampled.

/// Relative tolerance used to decide whether `dt` divides the span exactly
const STEP_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of samples a single grid may hold
pub const MAX_SAMPLES: usize = 100_000_000;

/// Errors from invalid grid parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// A parameter is NaN or infinite
    #[error("Grid parameter {name} is not finite: {value}")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Step must be strictly positive
    #[error("Grid step must be positive, got {0}")]
    InvalidStep(f64),

    /// End time precedes start time
    #[error("Grid end time {tf} precedes start time {t0}")]
    InvalidRange {
        /// Start time
        t0: f64,
        /// End time
        tf: f64,
    },

    /// Step is too small for the span to be sampled
    #[error("Grid of {steps} steps exceeds the limit of {max} samples")]
    TooManySamples {
        /// Requested number of steps, `(tf - t0) / dt`
        steps: f64,
        /// Sample limit
        max: usize,
    },
}

/// Grid parameters `(t0, tf, dt)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Start time in seconds
    pub t0: f64,
    /// End time in seconds, inclusive when reachable in whole steps
    pub tf: f64,
    /// Step in seconds
    pub dt: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            t0: 0.0,
            tf: 1.0,
            dt: 1e-4,
        }
    }
}

/// Uniformly spaced, increasing time values `t0, t0 + dt, ...`
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
    dt: f64,
}

impl TimeGrid {
    /// Generate the grid from `t0` to `tf` inclusive with step `dt`
    ///
    /// When `dt` divides `tf - t0` (within a small relative tolerance) the last
    /// sample is exactly `tf`. Otherwise the grid stops at the last whole step
    /// below `tf` and never runs past it.
    pub fn new(t0: f64, tf: f64, dt: f64) -> Result<Self, GridError> {
        for (name, value) in [("t0", t0), ("tf", tf), ("dt", dt)] {
            if !value.is_finite() {
                return Err(GridError::NonFinite { name, value });
            }
        }
        if dt <= 0.0 {
            return Err(GridError::InvalidStep(dt));
        }
        if tf < t0 {
            return Err(GridError::InvalidRange { t0, tf });
        }

        let steps = (tf - t0) / dt;
        if !steps.is_finite() || steps >= MAX_SAMPLES as f64 {
            return Err(GridError::TooManySamples {
                steps,
                max: MAX_SAMPLES,
            });
        }
        let rounded = steps.round();
        let exact = (steps - rounded).abs() <= STEP_TOLERANCE * rounded.max(1.0);
        let intervals = (if exact { rounded } else { steps.floor() }) as usize;

        let mut times: Vec<f64> = (0..=intervals).map(|i| t0 + i as f64 * dt).collect();
        if exact {
            if let Some(last) = times.last_mut() {
                *last = tf;
            }
        }

        Ok(Self { times, dt })
    }

    /// Build the grid from a [`GridSpec`]
    pub fn from_spec(spec: &GridSpec) -> Result<Self, GridError> {
        Self::new(spec.t0, spec.tf, spec.dt)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// A valid grid always holds at least `t0`
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Grid step
    pub fn step(&self) -> f64 {
        self.dt
    }

    /// Sample times in seconds
    pub fn times(&self) -> &[f64] {
        &self.times
    }
}
