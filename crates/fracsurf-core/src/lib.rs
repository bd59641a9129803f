//! Synthetic fractal profiles and surfaces with prescribed roughness, plus the
//! standard height-distribution parameters computed from them.
//!
//! Every generator is a pure function of its parameter struct and a caller
//! supplied random source; seeding that source reproduces the output.
//!
//! ```no_run
//! use fracsurf_core::metrics::{ProfileParameters, DEFAULT_DIGITS};
//! use fracsurf_core::profile::{generate_mpd, MpdParams};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let p = MpdParams { n: 1024, dimension: 1.5, interval: 0.5, sigma: 0.2 };
//! let profile = generate_mpd(&p, &mut rng).unwrap();
//! let rq = ProfileParameters::new(&profile).rms(DEFAULT_DIGITS);
//! ```
pub mod error;
pub mod metrics;
pub mod profile;
pub mod sampled;
pub mod spectral;
pub mod surface;

pub use error::{FracError, FracResult, PROFILE_DIMENSION_RANGE, SURFACE_DIMENSION_RANGE};
pub use sampled::{SampledGrid, SampledSeries};
