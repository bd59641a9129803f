//! Spectral synthesis of a fractal profile via the inverse DFT.
//!
//! Power spectrum S(k) = C · k^−(5−2D). The scale C is chosen so that, by
//! Parseval, mean(z²) = Rq² when magnitudes are deterministic:
//!
//!   C = Rq² · n² / (2 · Σ_{k=1}^{n/2−1} k^−(5−2D))
use std::f64::consts::TAU;

use num_complex::Complex64;
use rand::Rng;

use super::params::DftParams;
use crate::error::{check_finite, FracError, FracResult};
use crate::sampled::SampledSeries;
use crate::spectral::{inverse_dft, real_part};

/// Spectral scale C for `n` samples, dimension `d` and target `rq`.
pub fn spectral_scale(n: usize, d: f64, rq: f64) -> FracResult<f64> {
    let exponent = 5.0 - 2.0 * d;
    let sum: f64 = (1..n / 2).map(|k| (k as f64).powf(-exponent)).sum();
    if !(sum.is_finite() && sum > 0.0) {
        return Err(FracError::NumericDegeneracy(format!(
            "spectral normalisation sum is {sum} for n={n}, d={d}"
        )));
    }
    Ok(rq * rq * (n * n) as f64 / (2.0 * sum))
}

/// Build the conjugate-symmetric coefficient vector for a real profile.
pub fn profile_coefficients<R: Rng + ?Sized>(
    p: &DftParams,
    rng: &mut R,
) -> FracResult<Vec<Complex64>> {
    let n = p.n;
    let half = n / 2;
    let sqrt_c = spectral_scale(n, p.dimension, p.rq)?.sqrt();
    let decay = -(5.0 - 2.0 * p.dimension) / 2.0;

    // Indices 0 and n/2 stay zero.
    let mut coef = vec![Complex64::new(0.0, 0.0); n];
    for k in 1..half {
        let mut r = sqrt_c * (k as f64).powf(decay);
        if !p.stable {
            r *= rng.gen::<f64>();
        }
        let phase = rng.gen::<f64>() * TAU;
        coef[k] = Complex64::from_polar(r, phase);
    }
    for k in 1..half {
        coef[n - k] = coef[k].conj();
    }
    Ok(coef)
}

/// Generate a profile by spectral synthesis.
pub fn generate_dft<R: Rng + ?Sized>(p: &DftParams, rng: &mut R) -> FracResult<SampledSeries> {
    p.validate()?;
    let coef = profile_coefficients(p, rng)?;
    let values = real_part(&inverse_dft(&coef));
    check_finite("dft", &values)?;
    log::debug!("dft profile: n={} d={} rq={} stable={}", p.n, p.dimension, p.rq, p.stable);
    SampledSeries::new(values, p.interval)
}
