/// Errors raised while fitting or evaluating an interpolant
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpolationError {
    /// Knot times and values differ in length
    #[error("Length mismatch: {times} knot times but {values} knot values")]
    LengthMismatch {
        /// Number of knot times
        times: usize,
        /// Number of knot values
        values: usize,
    },

    /// Interpolation needs at least two knots
    #[error("Degenerate input: {0} knot(s), at least 2 are required")]
    TooFewPoints(usize),

    /// Knot times must be strictly increasing (duplicates are degenerate)
    #[error("Degenerate input: knot time {current} at index {index} does not exceed {previous}")]
    NotStrictlyIncreasing {
        /// Index of the offending knot
        index: usize,
        /// Preceding knot time
        previous: f64,
        /// Offending knot time
        current: f64,
    },

    /// Knot values must be finite
    #[error("Knot value at index {index} is not finite: {value}")]
    NonFiniteValue {
        /// Index of the offending knot
        index: usize,
        /// Offending value
        value: f64,
    },

    /// Target time is NaN or infinite
    #[error("Target time is not finite: {0}")]
    NonFiniteTarget(f64),

    /// Target lies outside the knot domain under the `error` extrapolation policy
    #[error("Target time {t} lies outside the interpolation domain [{min}, {max}]")]
    OutOfDomain {
        /// Requested time
        t: f64,
        /// First knot time
        min: f64,
        /// Last knot time
        max: f64,
    },
}
