use serde::{Deserialize, Serialize};

use crate::error::{
    check_dimension, check_interval, check_power_of_two, check_target, FracResult,
    SURFACE_DIMENSION_RANGE,
};

/// Diamond-square random midpoint displacement parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RmdParams {
    /// Grid side, power of two ≥ 2.
    pub n: usize,
    /// Fractal dimension, 2 < d < 3.
    pub dimension: f64,
    /// Target arithmetic mean height Sa.
    pub sa: f64,
    pub interval: f64,
}

impl Default for RmdParams {
    fn default() -> Self {
        Self { n: 128, dimension: 2.2, sa: 1.0, interval: 1.0 }
    }
}

impl RmdParams {
    pub fn validate(&self) -> FracResult<()> {
        check_dimension(self.dimension, SURFACE_DIMENSION_RANGE)?;
        check_power_of_two(self.n, 2)?;
        check_interval(self.interval)?;
        check_target("sa", self.sa)
    }
}

/// 2D spectral synthesis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceDftParams {
    /// Grid side, power of two ≥ 4.
    pub n: usize,
    pub dimension: f64,
    /// Target RMS height Sq.
    pub sq: f64,
    pub interval: f64,
    pub stable: bool,
}

impl Default for SurfaceDftParams {
    fn default() -> Self {
        Self { n: 128, dimension: 2.2, sq: 1.0, interval: 1.0, stable: true }
    }
}

impl SurfaceDftParams {
    pub fn validate(&self) -> FracResult<()> {
        check_dimension(self.dimension, SURFACE_DIMENSION_RANGE)?;
        check_power_of_two(self.n, 4)?;
        check_interval(self.interval)?;
        check_target("sq", self.sq)
    }
}
