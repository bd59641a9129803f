//! Diamond-square random midpoint displacement surfaces.
//!
//! Builds an (n+1)×(n+1) lattice from four random corners. Each level runs a
//! diamond pass (cell centres from their four diagonal corners) followed by a
//! square pass (edge midpoints from their three or four orthogonal
//! neighbours). The perturbation standard deviation starts at 1 and shrinks by
//! 2^(−H/2) before every level, H = 3 − D.
//!
//! The last row and column are dropped, the mean removed, and the result
//! rescaled so its Sa equals the requested value.
use rand::Rng;
use rand_distr::StandardNormal;

use super::params::RmdParams;
use crate::error::{check_finite, FracError, FracResult};
use crate::metrics::moments::Moments;
use crate::sampled::SampledGrid;

/// Row-major (n+1)×(n+1) working lattice with an assignment mask.
struct Lattice {
    side: usize,
    z: Vec<f64>,
    filled: Vec<bool>,
}

impl Lattice {
    fn new(n: usize) -> Self {
        let side = n + 1;
        Self { side, z: vec![0.0; side * side], filled: vec![false; side * side] }
    }

    #[inline]
    fn get(&self, r: usize, c: usize) -> f64 {
        self.z[r * self.side + c]
    }

    #[inline]
    fn is_filled(&self, r: usize, c: usize) -> bool {
        self.filled[r * self.side + c]
    }

    #[inline]
    fn put(&mut self, r: usize, c: usize, v: f64) {
        let idx = r * self.side + c;
        self.z[idx] = v;
        self.filled[idx] = true;
    }
}

fn perturbed_mean<R: Rng + ?Sized>(neighbours: &[f64], sd: f64, rng: &mut R) -> f64 {
    let avg = neighbours.iter().sum::<f64>() / neighbours.len() as f64;
    let z: f64 = rng.sample(StandardNormal);
    avg + sd * z
}

/// Run every subdivision level on a fresh lattice.
fn displace<R: Rng + ?Sized>(n: usize, hurst: f64, rng: &mut R) -> Lattice {
    let mut lat = Lattice::new(n);
    let mut sd = 1.0f64;
    for &(r, c) in &[(0, 0), (0, n), (n, 0), (n, n)] {
        let z: f64 = rng.sample(StandardNormal);
        lat.put(r, c, sd * z);
    }

    let decay = 0.5f64.powf(0.5 * hurst);
    let mut stp = n / 2;
    while stp >= 1 {
        sd *= decay;

        // Diamond: centres of 2·stp cells.
        for i in (stp..n).step_by(2 * stp) {
            for j in (stp..n).step_by(2 * stp) {
                let corners = [
                    lat.get(i - stp, j - stp),
                    lat.get(i + stp, j - stp),
                    lat.get(i - stp, j + stp),
                    lat.get(i + stp, j + stp),
                ];
                let v = perturbed_mean(&corners, sd, rng);
                lat.put(i, j, v);
            }
        }

        // Square: remaining lattice points at this step.
        for i in (0..=n).step_by(stp) {
            for j in (0..=n).step_by(stp) {
                if lat.is_filled(i, j) {
                    continue;
                }
                let v = if i == 0 {
                    perturbed_mean(&[lat.get(0, j - stp), lat.get(stp, j), lat.get(0, j + stp)], sd, rng)
                } else if i == n {
                    perturbed_mean(&[lat.get(n, j - stp), lat.get(n - stp, j), lat.get(n, j + stp)], sd, rng)
                } else if j == 0 {
                    perturbed_mean(&[lat.get(i - stp, 0), lat.get(i, stp), lat.get(i + stp, 0)], sd, rng)
                } else if j == n {
                    perturbed_mean(&[lat.get(i - stp, n), lat.get(i, n - stp), lat.get(i + stp, n)], sd, rng)
                } else {
                    perturbed_mean(
                        &[lat.get(i, j - stp), lat.get(i, j + stp), lat.get(i - stp, j), lat.get(i + stp, j)],
                        sd,
                        rng,
                    )
                };
                lat.put(i, j, v);
            }
        }

        stp /= 2;
    }

    debug_assert!(lat.filled.iter().all(|&f| f), "every lattice point must be assigned");
    lat
}

/// Generate a surface by diamond-square midpoint displacement.
pub fn generate_rmd<R: Rng + ?Sized>(p: &RmdParams, rng: &mut R) -> FracResult<SampledGrid> {
    p.validate()?;

    let n = p.n;
    let lat = displace(n, 3.0 - p.dimension, rng);

    // Drop the last row and column.
    let mut values = Vec::with_capacity(n * n);
    for r in 0..n {
        values.extend_from_slice(&lat.z[r * lat.side..r * lat.side + n]);
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    for v in &mut values {
        *v -= mean;
    }

    let realised = Moments::of(&values).mean_abs;
    if !(realised.is_finite() && realised > 0.0) {
        return Err(FracError::NumericDegeneracy(format!(
            "rmd: realised Sa is {realised}, cannot rescale"
        )));
    }
    let ratio = p.sa / realised;
    for v in &mut values {
        *v *= ratio;
    }

    check_finite("rmd", &values)?;
    log::debug!("rmd: n={} d={} raw Sa={:.4} → {}", n, p.dimension, realised, p.sa);
    SampledGrid::new(values, n, p.interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lattice_fully_assigned_for_small_grids() {
        for &n in &[2usize, 4, 8, 32] {
            let lat = displace(n, 0.5, &mut StdRng::seed_from_u64(n as u64));
            assert_eq!(lat.z.len(), (n + 1) * (n + 1));
            assert!(lat.filled.iter().all(|&f| f), "n = {n}");
        }
    }

    #[test]
    fn sa_matches_target_exactly() {
        for &(n, d, sa) in &[(64usize, 2.2, 1.0), (128, 2.5, 0.37), (16, 2.8, 12.0)] {
            let p = RmdParams { n, dimension: d, sa, interval: 1.0 };
            let g = generate_rmd(&p, &mut StdRng::seed_from_u64(9)).unwrap();
            assert_eq!(g.size(), n);
            assert_eq!(g.values().len(), n * n);
            assert_relative_eq!(Moments::of(g.values()).mean_abs, sa, max_relative = 1e-12);
        }
    }

    #[test]
    fn output_is_zero_mean() {
        let g = generate_rmd(&RmdParams::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_abs_diff_eq!(Moments::of(g.values()).mean, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn seed_reproduces_surface() {
        let p = RmdParams { n: 32, ..Default::default() };
        let a = generate_rmd(&p, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = generate_rmd(&p, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn interval_is_carried_through() {
        let p = RmdParams { n: 16, interval: 2.5, ..Default::default() };
        let g = generate_rmd(&p, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(g.interval(), 2.5);
    }

    #[test]
    fn rejects_non_power_of_two() {
        let p = RmdParams { n: 100, ..Default::default() };
        let err = generate_rmd(&p, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}
