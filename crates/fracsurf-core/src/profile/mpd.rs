//! Random midpoint displacement (fractional Brownian motion) profiles.
//!
//! Works on `n + 1` control points. The right endpoint is `sigma · N(0,1)`,
//! the left is 0. Each level fills the midpoints of the current intervals with
//! the neighbour average plus a normal perturbation whose variance shrinks by
//! 2^(−2H) per level, H = 2 − D.
use rand::Rng;
use rand_distr::StandardNormal;

use super::params::MpdParams;
use crate::error::{check_finite, FracResult};
use crate::sampled::SampledSeries;

/// Displacement variance at the first level: sigma² · (2^(−2H) − 1/4).
pub fn initial_displacement_variance(sigma: f64, hurst: f64) -> f64 {
    sigma * sigma * (0.5f64.powf(2.0 * hurst) - 0.25)
}

/// Fill the `n + 1` point buffer in place, one level at a time.
fn subdivide<R: Rng + ?Sized>(points: &mut [f64], hurst: f64, sigma: f64, rng: &mut R) {
    let n = points.len() - 1;
    let decay = 0.5f64.powf(2.0 * hurst);
    let mut variance = initial_displacement_variance(sigma, hurst);
    let mut half = n / 2;

    while half >= 1 {
        let sd = variance.sqrt();
        let step = 2 * half;
        // First interval, then the remaining midpoints at this resolution.
        let mut i = half;
        while i < n {
            let avg = 0.5 * (points[i - half] + points[i + half]);
            let z: f64 = rng.sample(StandardNormal);
            points[i] = avg + sd * z;
            i += step;
        }
        half /= 2;
        variance *= decay;
    }
}

/// Generate a profile by random midpoint displacement.
pub fn generate_mpd<R: Rng + ?Sized>(p: &MpdParams, rng: &mut R) -> FracResult<SampledSeries> {
    p.validate()?;

    let hurst = 2.0 - p.dimension;
    let mut points = vec![0.0f64; p.n + 1];
    let z: f64 = rng.sample(StandardNormal);
    points[p.n] = p.sigma * z;

    subdivide(&mut points, hurst, p.sigma, rng);

    // Drop the pinned left endpoint.
    let values = points.split_off(1);
    check_finite("mpd", &values)?;
    log::debug!(
        "mpd: n={} d={} levels={} sigma={}",
        p.n, p.dimension, p.n.trailing_zeros(), p.sigma
    );
    SampledSeries::new(values, p.interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ParameterCalculator, DEFAULT_DIGITS};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn variance_is_positive_inside_dimension_range() {
        for &h in &[0.05, 0.3, 0.5, 0.8, 0.95] {
            assert!(initial_displacement_variance(1.0, h) > 0.0, "H = {h}");
        }
    }

    #[test]
    fn variance_scales_with_sigma_squared() {
        // H = 0.5: 2^(−1) − 1/4 = 1/4.
        assert_relative_eq!(initial_displacement_variance(0.2, 0.5), 0.01, max_relative = 1e-12);
        assert_relative_eq!(
            initial_displacement_variance(3.0, 0.3),
            9.0 * initial_displacement_variance(1.0, 0.3),
            max_relative = 1e-12
        );
    }

    #[test]
    fn amplitude_is_linear_in_sigma() {
        let base = MpdParams { n: 256, dimension: 1.4, interval: 1.0, sigma: 0.2 };
        let scaled = MpdParams { sigma: 0.8, ..base.clone() };
        let a = generate_mpd(&base, &mut StdRng::seed_from_u64(12)).unwrap();
        let b = generate_mpd(&scaled, &mut StdRng::seed_from_u64(12)).unwrap();
        for (x, y) in a.values.iter().zip(&b.values) {
            assert_relative_eq!(*y, 4.0 * x, max_relative = 1e-9, epsilon = 1e-12);
        }
    }

    #[test]
    fn every_interior_point_is_visited() {
        // With sigma = 0 all perturbations vanish and the buffer becomes a
        // straight line between the endpoints.
        let mut pts = vec![0.0; 17];
        pts[16] = 16.0;
        subdivide(&mut pts, 0.5, 0.0, &mut StdRng::seed_from_u64(0));
        for (i, v) in pts.iter().enumerate() {
            assert_eq!(*v, i as f64);
        }
    }

    #[test]
    fn scenario_n1024_d15() {
        let p = MpdParams { n: 1024, dimension: 1.5, interval: 0.5, sigma: 0.2 };
        let s = generate_mpd(&p, &mut StdRng::seed_from_u64(2024)).unwrap();
        assert_eq!(s.len(), 1024);
        assert_eq!(s.interval(), 0.5);

        let rq = ParameterCalculator::new(&s).rms(DEFAULT_DIGITS);
        assert!(rq >= 0.0 && rq <= 5.0 * p.sigma, "Rq = {rq}");
    }

    #[test]
    fn zero_sigma_gives_flat_profile() {
        let p = MpdParams { sigma: 0.0, ..Default::default() };
        let s = generate_mpd(&p, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(s.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn single_sample_profile() {
        let p = MpdParams { n: 1, sigma: 1.0, ..Default::default() };
        let s = generate_mpd(&p, &mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn rejects_bad_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        let bad_n = MpdParams { n: 600, ..Default::default() };
        assert!(generate_mpd(&bad_n, &mut rng).unwrap_err().is_invalid_configuration());
        let bad_d = MpdParams { dimension: 2.0, ..Default::default() };
        assert!(generate_mpd(&bad_d, &mut rng).unwrap_err().is_invalid_configuration());
        let bad_dx = MpdParams { interval: 0.0, ..Default::default() };
        assert!(generate_mpd(&bad_dx, &mut rng).unwrap_err().is_invalid_configuration());
    }
}
