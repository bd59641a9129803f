use serde::{Deserialize, Serialize};

use super::wm::octave_range;
use crate::error::{
    check_dimension, check_interval, check_power_of_two, check_target, FracError, FracResult,
    PROFILE_DIMENSION_RANGE,
};

/// Upper bound on the number of W-M octaves summed for one profile.
pub const MAX_WM_OCTAVES: i32 = 1024;

/// Weierstrass–Mandelbrot summation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmParams {
    /// Sample count (≥ 2).
    pub n: usize,
    /// Fractal dimension, 1 < d < 2.
    pub dimension: f64,
    /// Amplitude scale G; the sum is multiplied by G^(d−1).
    pub scale: f64,
    pub interval: f64,
    /// Frequency base γ > 1.
    pub gamma: f64,
    /// Draw one uniform phase per octave instead of zero.
    pub random_phase: bool,
}

impl Default for WmParams {
    fn default() -> Self {
        Self { n: 512, dimension: 1.2, scale: 1.0, interval: 1.0, gamma: 1.5, random_phase: true }
    }
}

impl WmParams {
    pub fn validate(&self) -> FracResult<()> {
        check_dimension(self.dimension, PROFILE_DIMENSION_RANGE)?;
        check_interval(self.interval)?;
        if self.n < 2 {
            return Err(FracError::InvalidConfiguration(format!(
                "W-M summation needs at least 2 samples, got {}", self.n
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(FracError::InvalidConfiguration(format!(
                "amplitude scale must be positive, got {}", self.scale
            )));
        }
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(FracError::InvalidConfiguration(format!(
                "frequency base must satisfy gamma > 1, got {}", self.gamma
            )));
        }
        let (f_min, f_max) = octave_range(self.n, self.interval, self.gamma);
        let octaves = i64::from(f_max) - i64::from(f_min);
        if octaves < 1 {
            return Err(FracError::InvalidConfiguration(format!(
                "no W-M octave fits between span {} and interval {}",
                self.interval * (self.n - 1) as f64,
                self.interval
            )));
        }
        if octaves > i64::from(MAX_WM_OCTAVES) {
            return Err(FracError::InvalidConfiguration(format!(
                "gamma = {} needs {octaves} octaves, limit is {MAX_WM_OCTAVES}", self.gamma
            )));
        }
        Ok(())
    }
}

/// Spectral (inverse DFT) synthesis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DftParams {
    /// Sample count, power of two ≥ 4.
    pub n: usize,
    pub dimension: f64,
    /// Target RMS height Rq.
    pub rq: f64,
    pub interval: f64,
    /// Deterministic magnitudes; only phases are random.
    pub stable: bool,
}

impl Default for DftParams {
    fn default() -> Self {
        Self { n: 512, dimension: 1.2, rq: 1.0, interval: 1.0, stable: true }
    }
}

impl DftParams {
    pub fn validate(&self) -> FracResult<()> {
        check_dimension(self.dimension, PROFILE_DIMENSION_RANGE)?;
        check_power_of_two(self.n, 4)?;
        check_interval(self.interval)?;
        check_target("rq", self.rq)
    }
}

/// Random midpoint displacement parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MpdParams {
    /// Sample count, power of two; log2(n) subdivision levels.
    pub n: usize,
    pub dimension: f64,
    pub interval: f64,
    /// Target standard deviation.
    pub sigma: f64,
}

impl Default for MpdParams {
    fn default() -> Self {
        Self { n: 512, dimension: 1.2, interval: 1.0, sigma: 1.0 }
    }
}

impl MpdParams {
    pub fn validate(&self) -> FracResult<()> {
        check_dimension(self.dimension, PROFILE_DIMENSION_RANGE)?;
        check_power_of_two(self.n, 1)?;
        check_interval(self.interval)?;
        check_target("sigma", self.sigma)
    }
}
