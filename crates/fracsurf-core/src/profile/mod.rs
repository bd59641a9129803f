//! Fractal profile generators.
//!
//! Three independent constructions, each a pure function of its parameters
//! and the caller's random source:
//!   - `wm`:  Weierstrass–Mandelbrot multi-octave summation.
//!   - `dft`: spectral synthesis through the inverse DFT.
//!   - `mpd`: random midpoint displacement.
pub mod dft;
pub mod mpd;
pub mod params;
pub mod wm;

pub use dft::generate_dft;
pub use mpd::generate_mpd;
pub use params::{DftParams, MpdParams, WmParams, MAX_WM_OCTAVES};
pub use wm::generate_wm;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FracError, FracResult};
use crate::sampled::SampledSeries;

/// A profile method together with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum ProfileSpec {
    Wm(WmParams),
    Dft(DftParams),
    Mpd(MpdParams),
}

impl Default for ProfileSpec {
    fn default() -> Self {
        ProfileSpec::Dft(DftParams::default())
    }
}

impl ProfileSpec {
    /// Parse a spec such as `{"method": "mpd", "n": 1024, "sigma": 0.2}`.
    pub fn from_json(json: &str) -> FracResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| FracError::InvalidConfiguration(format!("profile spec: {e}")))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProfileSpec::Wm(_) => "wm",
            ProfileSpec::Dft(_) => "dft",
            ProfileSpec::Mpd(_) => "mpd",
        }
    }

    pub fn validate(&self) -> FracResult<()> {
        match self {
            ProfileSpec::Wm(p) => p.validate(),
            ProfileSpec::Dft(p) => p.validate(),
            ProfileSpec::Mpd(p) => p.validate(),
        }
    }

    /// Run the selected method. Each call returns a fresh series.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> FracResult<SampledSeries> {
        match self {
            ProfileSpec::Wm(p) => generate_wm(p, rng),
            ProfileSpec::Dft(p) => generate_dft(p, rng),
            ProfileSpec::Mpd(p) => generate_mpd(p, rng),
        }
    }
}
