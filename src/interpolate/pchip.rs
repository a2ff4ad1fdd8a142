use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::InterpolationError;

/// Policy for targets outside the knot domain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    /// Continue the cubic of the nearest end interval.
    #[default]
    Extrapolate,
    /// Hold the value of the nearest end knot.
    Clamp,
    /// Fail with [`InterpolationError::OutOfDomain`].
    Error,
}

impl Extrapolation {
    /// Returns all available policy names.
    pub fn variants() -> &'static [&'static str] {
        &["extrapolate", "clamp", "error"]
    }
}

impl fmt::Display for Extrapolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extrapolation::Extrapolate => write!(f, "extrapolate"),
            Extrapolation::Clamp => write!(f, "clamp"),
            Extrapolation::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Extrapolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extrapolate" | "extend" => Ok(Extrapolation::Extrapolate),
            "clamp" | "hold" => Ok(Extrapolation::Clamp),
            "error" | "reject" => Ok(Extrapolation::Error),
            _ => Err(format!(
                "Unknown extrapolation policy '{}'. Valid options: {}",
                s,
                Extrapolation::variants().join(", ")
            )),
        }
    }
}

/// Monotonicity-preserving piecewise cubic Hermite interpolant
#[derive(Debug, Clone)]
pub struct PchipInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    slopes: Vec<f64>,
    extrapolation: Extrapolation,
}

impl PchipInterpolator {
    /// Fit the interpolant through `(x, y)`
    ///
    /// `x` must be strictly increasing with at least two entries and every `y`
    /// must be finite.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::LengthMismatch {
                times: x.len(),
                values: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(InterpolationError::TooFewPoints(x.len()));
        }
        for (i, pair) in x.windows(2).enumerate() {
            if !(pair[1] > pair[0]) || !pair[1].is_finite() || !pair[0].is_finite() {
                return Err(InterpolationError::NotStrictlyIncreasing {
                    index: i + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }
        if let Some((index, &value)) = y.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InterpolationError::NonFiniteValue { index, value });
        }

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            slopes: pchip_slopes(x, y),
            extrapolation: Extrapolation::default(),
        })
    }

    /// Set the out-of-domain policy
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Active out-of-domain policy
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// `(first knot, last knot)`
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Knot derivatives chosen by the shape-preserving rule
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    /// Evaluate the interpolant at a single time
    pub fn evaluate(&self, t: f64) -> Result<f64, InterpolationError> {
        if !t.is_finite() {
            return Err(InterpolationError::NonFiniteTarget(t));
        }

        let (min, max) = self.domain();
        let n = self.x.len();
        if t < min || t > max {
            match self.extrapolation {
                Extrapolation::Extrapolate => {}
                Extrapolation::Clamp => {
                    return Ok(if t < min { self.y[0] } else { self.y[n - 1] });
                }
                Extrapolation::Error => {
                    return Err(InterpolationError::OutOfDomain { t, min, max });
                }
            }
        }

        // Interval index, pinned to the end intervals when extrapolating
        let i = self
            .x
            .partition_point(|&xk| xk <= t)
            .saturating_sub(1)
            .min(n - 2);

        // Knots are returned verbatim so the curve passes through them exactly
        if t == self.x[i] {
            return Ok(self.y[i]);
        }
        if t == self.x[i + 1] {
            return Ok(self.y[i + 1]);
        }

        Ok(hermite(
            t,
            self.x[i],
            self.x[i + 1],
            self.y[i],
            self.y[i + 1],
            self.slopes[i],
            self.slopes[i + 1],
        ))
    }

    /// Evaluate at every target, preserving order
    pub fn evaluate_many(&self, targets: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        targets.iter().map(|&t| self.evaluate(t)).collect()
    }
}

/// Fit a PCHIP curve through `(known_times, known_values)` and sample it at `target_times`
pub fn interpolate_features(
    target_times: &[f64],
    known_times: &[f64],
    known_values: &[f64],
    extrapolation: Extrapolation,
) -> Result<Vec<f64>, InterpolationError> {
    PchipInterpolator::new(known_times, known_values)?
        .with_extrapolation(extrapolation)
        .evaluate_many(target_times)
}

/// Cubic Hermite segment on `[x0, x1]` with end slopes `d0`, `d1`
///
/// Written relative to `y0` so flat segments reproduce `y0` bit for bit.
#[inline]
fn hermite(t: f64, x0: f64, x1: f64, y0: f64, y1: f64, d0: f64, d1: f64) -> f64 {
    let h = x1 - x0;
    let s = (t - x0) / h;
    let s2 = s * s;
    let s3 = s2 * s;

    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    y0 + (y1 - y0) * h01 + h * (d0 * h10 + d1 * h11)
}

/// Knot derivatives for PCHIP
///
/// Interior knots take the weighted harmonic mean of the adjacent secants, or
/// zero at local extrema and flat spots. End knots use a one-sided three-point
/// estimate limited to keep the end interval shape-preserving.
fn pchip_slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let m: Vec<f64> = y
        .windows(2)
        .zip(&h)
        .map(|(w, hk)| (w[1] - w[0]) / hk)
        .collect();

    if n == 2 {
        return vec![m[0], m[0]];
    }

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        let (m0, m1) = (m[k - 1], m[k]);
        if sign(m0) != sign(m1) || m0 == 0.0 || m1 == 0.0 {
            continue;
        }
        let w1 = 2.0 * h[k] + h[k - 1];
        let w2 = h[k] + 2.0 * h[k - 1];
        d[k] = (w1 + w2) / (w1 / m0 + w2 / m1);
    }

    d[0] = edge_slope(h[0], h[1], m[0], m[1]);
    d[n - 1] = edge_slope(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);
    d
}

fn edge_slope(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);

    if sign(d) != sign(m0) {
        0.0
    } else if sign(m0) != sign(m1) && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}

/// Sign with zero mapped to zero, unlike `f64::signum`
fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
