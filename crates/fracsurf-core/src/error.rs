use thiserror::Error;

/// Failures raised by the generators and parameter parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FracError {
    /// A parameter violates its algorithm's domain (dimension range,
    /// power-of-two sample count, non-positive interval, ...).
    /// Raised before any computation begins.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Generation produced NaN/Inf or an undefined normalisation.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),
}

impl FracError {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, FracError::InvalidConfiguration(_))
    }
}

pub type FracResult<T> = Result<T, FracError>;

// ── Shared validators ─────────────────────────────────────────────────────────

/// Open interval of valid fractal dimensions for profile methods.
pub const PROFILE_DIMENSION_RANGE: (f64, f64) = (1.0, 2.0);
/// Open interval of valid fractal dimensions for surface methods.
pub const SURFACE_DIMENSION_RANGE: (f64, f64) = (2.0, 3.0);

pub(crate) fn check_dimension(d: f64, (lo, hi): (f64, f64)) -> FracResult<()> {
    if d > lo && d < hi {
        Ok(())
    } else {
        Err(FracError::InvalidConfiguration(format!(
            "fractal dimension must satisfy {lo} < d < {hi}, got {d}"
        )))
    }
}

pub(crate) fn check_interval(interval: f64) -> FracResult<()> {
    if interval.is_finite() && interval > 0.0 {
        Ok(())
    } else {
        Err(FracError::InvalidConfiguration(format!(
            "sampling interval must be positive, got {interval}"
        )))
    }
}

/// `n` must be a power of two and at least `min`.
pub(crate) fn check_power_of_two(n: usize, min: usize) -> FracResult<()> {
    if !n.is_power_of_two() {
        return Err(FracError::InvalidConfiguration(format!(
            "sample count must be a power of two, got {n}"
        )));
    }
    if n < min {
        return Err(FracError::InvalidConfiguration(format!(
            "sample count must be at least {min}, got {n}"
        )));
    }
    Ok(())
}

/// Target statistics (Rq, Sq, Sa, sigma) must be finite and non-negative.
pub(crate) fn check_target(name: &str, value: f64) -> FracResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FracError::InvalidConfiguration(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}

/// Reject outputs carrying NaN/Inf.
pub(crate) fn check_finite(method: &str, values: &[f64]) -> FracResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(i) => Err(FracError::NumericDegeneracy(format!(
            "{method}: non-finite sample at index {i}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_bounds_are_open() {
        assert!(check_dimension(1.5, PROFILE_DIMENSION_RANGE).is_ok());
        assert!(check_dimension(1.0, PROFILE_DIMENSION_RANGE).unwrap_err().is_invalid_configuration());
        assert!(check_dimension(2.0, PROFILE_DIMENSION_RANGE).unwrap_err().is_invalid_configuration());
        assert!(check_dimension(f64::NAN, SURFACE_DIMENSION_RANGE).is_err());
    }

    #[test]
    fn power_of_two_and_minimum() {
        assert!(check_power_of_two(512, 4).is_ok());
        assert!(check_power_of_two(500, 4).is_err());
        assert!(check_power_of_two(2, 4).is_err());
        assert!(check_power_of_two(0, 1).is_err());
    }

    #[test]
    fn interval_must_be_positive_and_finite() {
        assert!(check_interval(0.5).is_ok());
        assert!(check_interval(0.0).is_err());
        assert!(check_interval(-1.0).is_err());
        assert!(check_interval(f64::INFINITY).is_err());
    }

    #[test]
    fn non_finite_output_is_degenerate() {
        let err = check_finite("dft", &[0.0, f64::NAN]).unwrap_err();
        assert_eq!(err, FracError::NumericDegeneracy("dft: non-finite sample at index 1".into()));
    }
}
