//! Raw height moments about zero, accumulated in one pass.
//!
//! Heights are taken as deviations from the reference line/plane at zero, so
//! no mean is subtracted before the higher moments.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub count: usize,
    pub mean: f64,
    /// mean(|z|)
    pub mean_abs: f64,
    /// mean(z²)
    pub mean_sq: f64,
    /// mean(z³)
    pub mean_cube: f64,
    /// mean(z⁴)
    pub mean_quart: f64,
}

impl Moments {
    /// Moments of `values`. All fields are NaN for an empty slice.
    pub fn of(values: &[f64]) -> Self {
        let mut sum = 0.0f64;
        let mut abs = 0.0f64;
        let mut sq = 0.0f64;
        let mut cube = 0.0f64;
        let mut quart = 0.0f64;
        for &z in values {
            let z2 = z * z;
            sum += z;
            abs += z.abs();
            sq += z2;
            cube += z2 * z;
            quart += z2 * z2;
        }
        let n = values.len() as f64;
        Self {
            count: values.len(),
            mean: sum / n,
            mean_abs: abs / n,
            mean_sq: sq / n,
            mean_cube: cube / n,
            mean_quart: quart / n,
        }
    }

    /// Root-mean-square height, Rq / Sq.
    pub fn rms(&self) -> f64 {
        self.mean_sq.sqrt()
    }

    /// mean(z³) / Rq³. NaN when Rq is zero.
    pub fn skewness(&self) -> f64 {
        let rq = self.rms();
        if rq == 0.0 {
            return f64::NAN;
        }
        self.mean_cube / rq.powi(3)
    }

    /// mean(z⁴) / Rq⁴. NaN when Rq is zero.
    pub fn kurtosis(&self) -> f64 {
        let rq = self.rms();
        if rq == 0.0 {
            return f64::NAN;
        }
        self.mean_quart / rq.powi(4)
    }
}

/// Round half away from zero to `digits` decimal places.
/// Negative `digits` rounds to tens, hundreds, …
pub fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn square_wave_moments() {
        // ±1 alternating: Rq = Ra = 1, Rsk = 0, Rku = 1.
        let z: Vec<f64> = (0..100).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let m = Moments::of(&z);
        assert_eq!(m.count, 100);
        assert_relative_eq!(m.rms(), 1.0);
        assert_relative_eq!(m.mean_abs, 1.0);
        assert_eq!(m.skewness(), 0.0);
        assert_relative_eq!(m.kurtosis(), 1.0);
    }

    #[test]
    fn single_spike_is_skewed() {
        // [3, 0, 0, 0]: mean_sq = 9/4, Rq = 1.5, mean_cube = 27/4 → Rsk = 2.
        let m = Moments::of(&[3.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(m.rms(), 1.5);
        assert_relative_eq!(m.skewness(), 2.0);
        // mean_quart = 81/4, Rq⁴ = 81/16 → Rku = 4.
        assert_relative_eq!(m.kurtosis(), 4.0);
    }

    #[test]
    fn flat_field_has_nan_shape_statistics() {
        let m = Moments::of(&[0.0; 16]);
        assert_eq!(m.rms(), 0.0);
        assert!(m.skewness().is_nan());
        assert!(m.kurtosis().is_nan());
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.234_56, 4), 1.2346);
        assert_eq!(round_to(-1.234_56, 2), -1.23);
        assert!(round_to(f64::NAN, 4).is_nan());
    }
}
