//! Inverse discrete Fourier transforms for spectral synthesis.
//!
//! Both transforms use the backward normalisation (scale by 1/N per axis),
//! so a real signal's coefficients round-trip unchanged.
use num_complex::Complex64;
use rustfft::FftPlanner;

/// 1D inverse DFT of `coef`, scaled by `1/n`.
pub fn inverse_dft(coef: &[Complex64]) -> Vec<Complex64> {
    let n = coef.len();
    let mut buf = coef.to_vec();
    if n == 0 {
        return buf;
    }
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_inverse(n).process(&mut buf);
    let scale = 1.0 / n as f64;
    for c in &mut buf {
        *c *= scale;
    }
    buf
}

/// 2D inverse DFT of a row-major `n × n` coefficient matrix, scaled by `1/n²`.
///
/// Rows are transformed first, then columns.
pub fn inverse_dft_2d(coef: &[Complex64], n: usize) -> Vec<Complex64> {
    assert_eq!(coef.len(), n * n, "coefficient matrix must be n × n");
    let mut buf = coef.to_vec();
    if n == 0 {
        return buf;
    }
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_inverse(n);

    // Rows are contiguous chunks of length n: one call transforms all of them.
    fft.process(&mut buf);

    let mut column = vec![Complex64::new(0.0, 0.0); n];
    for c in 0..n {
        for r in 0..n {
            column[r] = buf[r * n + c];
        }
        fft.process(&mut column);
        for r in 0..n {
            buf[r * n + c] = column[r];
        }
    }

    let scale = 1.0 / (n * n) as f64;
    for c in &mut buf {
        *c *= scale;
    }
    buf
}

pub fn real_part(values: &[Complex64]) -> Vec<f64> {
    values.iter().map(|c| c.re).collect()
}

/// Largest |imaginary| relative to the largest |real| component.
/// Zero for an all-zero input.
pub fn max_imaginary_ratio(values: &[Complex64]) -> f64 {
    let max_re = values.iter().map(|c| c.re.abs()).fold(0.0, f64::max);
    let max_im = values.iter().map(|c| c.im.abs()).fold(0.0, f64::max);
    if max_re == 0.0 {
        max_im
    } else {
        max_im / max_re
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn single_bin_gives_cosine() {
        // X[1] = X[n-1] = n/2 → x_j = cos(2πj/n).
        let n = 16;
        let mut coef = vec![Complex64::new(0.0, 0.0); n];
        coef[1] = Complex64::new(n as f64 / 2.0, 0.0);
        coef[n - 1] = Complex64::new(n as f64 / 2.0, 0.0);
        let out = inverse_dft(&coef);
        for (j, v) in out.iter().enumerate() {
            assert_abs_diff_eq!(v.re, (2.0 * PI * j as f64 / n as f64).cos(), epsilon = 1e-12);
            assert_abs_diff_eq!(v.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn dc_term_2d_is_mean() {
        let n = 8;
        let mut coef = vec![Complex64::new(0.0, 0.0); n * n];
        coef[0] = Complex64::new(64.0 * 3.0, 0.0);
        let out = inverse_dft_2d(&coef, n);
        for v in &out {
            assert_abs_diff_eq!(v.re, 3.0, epsilon = 1e-12);
        }
        assert!(max_imaginary_ratio(&out) < 1e-12);
    }

    #[test]
    fn separable_2d_bin() {
        // X[1][0] = X[n-1][0] = n²/2 → x[r][c] = cos(2πr/n), constant along rows.
        let n = 8;
        let half = (n * n) as f64 / 2.0;
        let mut coef = vec![Complex64::new(0.0, 0.0); n * n];
        coef[n] = Complex64::new(half, 0.0);
        coef[(n - 1) * n] = Complex64::new(half, 0.0);
        let out = real_part(&inverse_dft_2d(&coef, n));
        for r in 0..n {
            let expected = (2.0 * PI * r as f64 / n as f64).cos();
            for c in 0..n {
                assert_abs_diff_eq!(out[r * n + c], expected, epsilon = 1e-12);
            }
        }
    }
}
