pub mod moments;
pub mod parameters;

pub use moments::{round_to, Moments};
pub use parameters::{
    FractalParameters, HeightData, ParameterCalculator, ProfileParameters, Statistic,
    SurfaceParameters, DEFAULT_DIGITS,
};
