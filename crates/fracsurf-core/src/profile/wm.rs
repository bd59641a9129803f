//! Weierstrass–Mandelbrot profile synthesis.
//!
//! z(x) = G^(D−1) · Σ_f cos(2π·γ^f·x + φ_f) / γ^((2−D)·f)
//!
//! The octave range is chosen so the lowest frequency spans the whole profile.
//! The range is half-open: the octave at the sampling frequency would add the
//! same value to every sample, so it is left out.
use std::f64::consts::TAU;

use rand::Rng;

use super::params::WmParams;
use crate::error::{check_finite, FracResult};
use crate::sampled::SampledSeries;

/// Octave index bounds for a profile of `n` samples; octaves run over
/// `f_min..f_max`, excluding `f_max`.
pub fn octave_range(n: usize, interval: f64, gamma: f64) -> (i32, i32) {
    let span = interval * (n - 1) as f64;
    let ln_gamma = gamma.ln();
    let f_min = -(span.ln() / ln_gamma).ceil() as i32;
    let f_max = -(interval.ln() / ln_gamma).ceil() as i32;
    (f_min, f_max)
}

/// Generate a W-M profile.
pub fn generate_wm<R: Rng + ?Sized>(p: &WmParams, rng: &mut R) -> FracResult<SampledSeries> {
    p.validate()?;

    let (f_min, f_max) = octave_range(p.n, p.interval, p.gamma);
    let mut values = vec![0.0f64; p.n];

    for f in f_min..f_max {
        // One phase per octave, shared by every sample.
        let phase = if p.random_phase { rng.gen::<f64>() * TAU } else { 0.0 };
        let freq = p.gamma.powi(f);
        let amp = p.gamma.powf(-(2.0 - p.dimension) * f as f64);
        for (i, v) in values.iter_mut().enumerate() {
            *v += amp * (TAU * freq * i as f64 * p.interval + phase).cos();
        }
    }

    let g = p.scale.powf(p.dimension - 1.0);
    for v in &mut values {
        *v *= g;
    }

    check_finite("wm", &values)?;
    log::debug!(
        "wm: n={} d={} octaves {}..{} (gamma={})",
        p.n, p.dimension, f_min, f_max, p.gamma
    );
    SampledSeries::new(values, p.interval)
}
