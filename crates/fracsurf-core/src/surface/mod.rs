//! Fractal surface generators.
//!   - `rmd`: diamond-square random midpoint displacement, rescaled to a target Sa.
//!   - `dft`: 2D spectral synthesis targeting Sq.
pub mod dft;
pub mod params;
pub mod rmd;

pub use dft::generate_surface_dft;
pub use params::{RmdParams, SurfaceDftParams};
pub use rmd::generate_rmd;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FracError, FracResult};
use crate::sampled::SampledGrid;

/// A surface method together with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum SurfaceSpec {
    Rmd(RmdParams),
    Dft(SurfaceDftParams),
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        SurfaceSpec::Dft(SurfaceDftParams::default())
    }
}

impl SurfaceSpec {
    pub fn from_json(json: &str) -> FracResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| FracError::InvalidConfiguration(format!("surface spec: {e}")))
    }

    pub fn name(&self) -> &'static str {
        match self {
            SurfaceSpec::Rmd(_) => "rmd",
            SurfaceSpec::Dft(_) => "dft",
        }
    }

    pub fn validate(&self) -> FracResult<()> {
        match self {
            SurfaceSpec::Rmd(p) => p.validate(),
            SurfaceSpec::Dft(p) => p.validate(),
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> FracResult<SampledGrid> {
        match self {
            SurfaceSpec::Rmd(p) => generate_rmd(p, rng),
            SurfaceSpec::Dft(p) => generate_surface_dft(p, rng),
        }
    }
}
