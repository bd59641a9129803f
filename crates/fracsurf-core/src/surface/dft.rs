//! 2D spectral synthesis of a fractal surface via the inverse DFT.
//!
//! Power spectrum S(u, v) = C · (u² + v²)^(D−4). Coefficients are filled in
//! conjugate-symmetric quadruples so the inverse transform is real.
//!
//! Normalisation sums the quarter plane as two overlapping strips,
//!   Σ_{u∈[1,n/2), v∈[0,n/2)} + Σ_{u∈[0,n/2), v∈[1,n/2)},
//! which counts each interior bin twice and each axis bin once. That matches
//! the four-fold fill below exactly, so stable synthesis hits Sq on the nose.
use std::f64::consts::TAU;

use num_complex::Complex64;
use rand::Rng;
use rand_distr::StandardNormal;

use super::params::SurfaceDftParams;
use crate::error::{check_finite, FracError, FracResult};
use crate::sampled::SampledGrid;
use crate::spectral::{inverse_dft_2d, real_part};

#[inline]
fn power(u: usize, v: usize, d: f64) -> f64 {
    ((u * u + v * v) as f64).powf(d - 4.0)
}

/// Spectral scale C for an `n × n` surface with dimension `d` and target `sq`.
pub fn spectral_scale_2d(n: usize, d: f64, sq: f64) -> FracResult<f64> {
    let half = n / 2;
    let mut strip_u = 0.0f64;
    let mut strip_v = 0.0f64;
    for u in 0..half {
        for v in 0..half {
            if u >= 1 {
                strip_u += power(u, v, d);
            }
            if v >= 1 {
                strip_v += power(u, v, d);
            }
        }
    }
    let denom = 2.0 * strip_u + 2.0 * strip_v;
    if !(denom.is_finite() && denom > 0.0) {
        return Err(FracError::NumericDegeneracy(format!(
            "2D spectral normalisation sum is {denom} for n={n}, d={d}"
        )));
    }
    let n2 = (n * n) as f64;
    Ok(sq * sq * n2 * n2 / denom)
}

/// Magnitude for one bin: deterministic when `stable`, else scaled by N(0,1).
fn magnitude<R: Rng + ?Sized>(base: f64, stable: bool, rng: &mut R) -> f64 {
    if stable {
        base
    } else {
        let z: f64 = rng.sample(StandardNormal);
        base * z
    }
}

/// Build the row-major `n × n` coefficient matrix of a real surface.
pub fn surface_coefficients<R: Rng + ?Sized>(
    p: &SurfaceDftParams,
    rng: &mut R,
) -> FracResult<Vec<Complex64>> {
    let n = p.n;
    let half = n / 2;
    let d = p.dimension;
    let sqrt_c = spectral_scale_2d(n, d, p.sq)?.sqrt();
    let decay = (d - 4.0) / 2.0;
    let at = |r: usize, c: usize| r * n + c;

    let mut coef = vec![Complex64::new(0.0, 0.0); n * n];

    for u in 1..half {
        for v in 1..half {
            let phase1 = rng.gen::<f64>() * TAU;
            let phase2 = rng.gen::<f64>() * TAU;
            let base = sqrt_c * ((u * u + v * v) as f64).powf(decay);
            let mag1 = magnitude(base, p.stable, rng);
            let mag2 = magnitude(base, p.stable, rng);

            let c1 = Complex64::from_polar(mag1, phase1);
            let c2 = Complex64::from_polar(mag2, phase2);
            coef[at(u, v)] = c1;
            coef[at(n - u, n - v)] = c1.conj();
            coef[at(u, n - v)] = c2;
            coef[at(n - u, v)] = c2.conj();
        }
    }

    // Axis rows/columns: the 1D analogue of the same rule.
    for i in 1..half {
        let phase_u = rng.gen::<f64>() * TAU;
        let phase_v = rng.gen::<f64>() * TAU;
        let base = sqrt_c * (i as f64).powf(2.0 * decay);
        let mag_u = magnitude(base, p.stable, rng);
        let mag_v = magnitude(base, p.stable, rng);

        let cu = Complex64::from_polar(mag_u, phase_u);
        let cv = Complex64::from_polar(mag_v, phase_v);
        coef[at(i, 0)] = cu;
        coef[at(n - i, 0)] = cu.conj();
        coef[at(0, i)] = cv;
        coef[at(0, n - i)] = cv.conj();
    }

    Ok(coef)
}

/// Generate a surface by 2D spectral synthesis.
pub fn generate_surface_dft<R: Rng + ?Sized>(
    p: &SurfaceDftParams,
    rng: &mut R,
) -> FracResult<SampledGrid> {
    p.validate()?;
    let coef = surface_coefficients(p, rng)?;
    let values = real_part(&inverse_dft_2d(&coef, p.n));
    check_finite("surface dft", &values)?;
    log::debug!("dft surface: n={} d={} sq={} stable={}", p.n, p.dimension, p.sq, p.stable);
    SampledGrid::new(values, p.n, p.interval)
}
