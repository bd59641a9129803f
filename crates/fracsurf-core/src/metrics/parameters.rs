//! Height-distribution parameters (Rq/Ra/Rsk/Rku and Sq/Sa/Ssk/Sku).
use std::collections::BTreeMap;

use serde::Serialize;

use super::moments::{round_to, Moments};
use crate::sampled::{SampledGrid, SampledSeries};

/// Rounding used when the caller does not pick a digit count.
pub const DEFAULT_DIGITS: i32 = 4;

/// Containers the calculator can read.
pub trait HeightData {
    /// Parameter name prefix: `R` for profiles, `S` for surfaces.
    const PREFIX: char;

    fn heights(&self) -> &[f64];
}

impl HeightData for SampledSeries {
    const PREFIX: char = 'R';

    fn heights(&self) -> &[f64] {
        &self.values
    }
}

impl HeightData for SampledGrid {
    const PREFIX: char = 'S';

    fn heights(&self) -> &[f64] {
        self.values()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Rms,
    MeanAbs,
    Skewness,
    Kurtosis,
}

impl Statistic {
    pub const ALL: [Statistic; 4] =
        [Statistic::Rms, Statistic::MeanAbs, Statistic::Skewness, Statistic::Kurtosis];

    fn suffix(self) -> &'static str {
        match self {
            Statistic::Rms => "q",
            Statistic::MeanAbs => "a",
            Statistic::Skewness => "sk",
            Statistic::Kurtosis => "ku",
        }
    }

    /// Standard parameter name, e.g. `Rq` or `Ssk`.
    pub fn key(self, prefix: char) -> String {
        format!("{prefix}{}", self.suffix())
    }
}

/// Parameter name → rounded value. The first value recorded for a name is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FractalParameters(BTreeMap<String, f64>);

impl FractalParameters {
    /// Record `value` under `key` unless the key is already present.
    /// Returns the value now stored.
    pub fn record(&mut self, key: String, value: f64) -> f64 {
        *self.0.entry(key).or_insert(value)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Computes roughness parameters for one container.
///
/// Moments are accumulated once at construction; each getter rounds on the
/// way out and records its result in the instance's `FractalParameters`.
/// Borrowing the container keeps it unchanged for the calculator's lifetime.
pub struct ParameterCalculator<'a, D: HeightData> {
    data: &'a D,
    moments: Moments,
    params: FractalParameters,
}

pub type ProfileParameters<'a> = ParameterCalculator<'a, SampledSeries>;
pub type SurfaceParameters<'a> = ParameterCalculator<'a, SampledGrid>;

impl<'a, D: HeightData> ParameterCalculator<'a, D> {
    pub fn new(data: &'a D) -> Self {
        let moments = Moments::of(data.heights());
        if moments.count == 0 {
            log::warn!("parameter calculator built on an empty container");
        }
        Self { data, moments, params: FractalParameters::default() }
    }

    pub fn data(&self) -> &'a D {
        self.data
    }

    fn record(&mut self, stat: Statistic, raw: f64, digits: i32) -> f64 {
        let value = round_to(raw, digits);
        self.params.record(stat.key(D::PREFIX), value);
        value
    }

    /// Root-mean-square height (`Rq` / `Sq`).
    pub fn rms(&mut self, digits: i32) -> f64 {
        self.record(Statistic::Rms, self.moments.rms(), digits)
    }

    /// Arithmetic mean height (`Ra` / `Sa`).
    pub fn mean_abs(&mut self, digits: i32) -> f64 {
        self.record(Statistic::MeanAbs, self.moments.mean_abs, digits)
    }

    /// Skewness (`Rsk` / `Ssk`). Also records the RMS at default rounding.
    pub fn skewness(&mut self, digits: i32) -> f64 {
        self.rms(DEFAULT_DIGITS);
        let raw = self.moments.skewness();
        if raw.is_nan() {
            log::warn!("{}: zero RMS height, skewness undefined", Statistic::Skewness.key(D::PREFIX));
        }
        self.record(Statistic::Skewness, raw, digits)
    }

    /// Kurtosis (`Rku` / `Sku`). Also records the RMS at default rounding.
    pub fn kurtosis(&mut self, digits: i32) -> f64 {
        self.rms(DEFAULT_DIGITS);
        let raw = self.moments.kurtosis();
        if raw.is_nan() {
            log::warn!("{}: zero RMS height, kurtosis undefined", Statistic::Kurtosis.key(D::PREFIX));
        }
        self.record(Statistic::Kurtosis, raw, digits)
    }

    pub fn get(&mut self, stat: Statistic, digits: i32) -> f64 {
        match stat {
            Statistic::Rms => self.rms(digits),
            Statistic::MeanAbs => self.mean_abs(digits),
            Statistic::Skewness => self.skewness(digits),
            Statistic::Kurtosis => self.kurtosis(digits),
        }
    }

    /// All four statistics at `digits`, in a fresh map.
    pub fn report(&mut self, digits: i32) -> FractalParameters {
        let mut out = FractalParameters::default();
        for stat in Statistic::ALL {
            let v = self.get(stat, digits);
            out.record(stat.key(D::PREFIX), v);
        }
        out
    }

    /// Values recorded so far, first write per name.
    pub fn parameters(&self) -> &FractalParameters {
        &self.params
    }
}
