use serde::Serialize;

use crate::error::{check_interval, FracError, FracResult};

/// A 1D height profile: `values[i]` is the height at `i * interval`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledSeries {
    pub values: Vec<f64>,
    interval: f64,
}

impl SampledSeries {
    /// Wrap `values` sampled every `interval` (must be positive).
    pub fn new(values: Vec<f64>, interval: f64) -> FracResult<Self> {
        check_interval(interval)?;
        Ok(Self { values, interval })
    }

    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Replace the sampling interval. The values are left untouched.
    pub fn set_interval(&mut self, interval: f64) -> FracResult<()> {
        check_interval(interval)?;
        self.interval = interval;
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Abscissae `0, interval, 2·interval, …`, one per sample.
    pub fn positions(&self) -> Vec<f64> {
        (0..self.values.len()).map(|i| i as f64 * self.interval).collect()
    }

    pub fn min_height(&self) -> f64 {
        self.values.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max_height(&self) -> f64 {
        self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// A square `n × n` height surface stored row-major, with one interval
/// shared by rows and columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledGrid {
    values: Vec<f64>,
    size: usize,
    interval: f64,
}

impl SampledGrid {
    /// Wrap a row-major `size × size` buffer.
    pub fn new(values: Vec<f64>, size: usize, interval: f64) -> FracResult<Self> {
        if values.len() != size * size {
            return Err(FracError::InvalidConfiguration(format!(
                "grid of side {size} needs {} values, got {}",
                size * size,
                values.len()
            )));
        }
        check_interval(interval)?;
        Ok(Self { values, size, interval })
    }

    /// A zero-height grid.
    pub fn flat(size: usize, interval: f64) -> FracResult<Self> {
        Self::new(vec![0.0; size * size], size, interval)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn set_interval(&mut self, interval: f64) -> FracResult<()> {
        check_interval(interval)?;
        self.interval = interval;
        Ok(())
    }

    /// Row-major heights, `size * size` entries.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable heights. The slice cannot change length, so the shape holds.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self.values[row * self.size + col] = val;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    /// Shared row/column abscissae.
    pub fn axis(&self) -> Vec<f64> {
        (0..self.size).map(|i| i as f64 * self.interval).collect()
    }

    pub fn min_height(&self) -> f64 {
        self.values.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max_height(&self) -> f64 {
        self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_rejects_non_positive_interval() {
        assert!(SampledSeries::new(vec![1.0], 0.0).is_err());
        assert!(SampledSeries::new(vec![1.0], -0.5).is_err());
    }

    #[test]
    fn set_interval_leaves_values_alone() {
        let mut s = SampledSeries::new(vec![1.0, 2.0, 3.0], 1.0).unwrap();
        s.set_interval(0.25).unwrap();
        assert_eq!(s.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(s.interval(), 0.25);

        assert!(s.set_interval(0.0).is_err());
        assert_eq!(s.interval(), 0.25, "failed update must keep the old interval");
    }

    #[test]
    fn positions_step_by_interval() {
        let s = SampledSeries::new(vec![0.0; 4], 0.5).unwrap();
        assert_eq!(s.positions(), vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn grid_get_set_row() {
        let mut g = SampledGrid::flat(3, 2.0).unwrap();
        g.set(1, 2, 7.0);
        assert_eq!(g.get(1, 2), 7.0);
        assert_eq!(g.row(1), &[0.0, 0.0, 7.0]);
        assert_eq!(g.axis(), vec![0.0, 2.0, 4.0]);
        assert_eq!(g.max_height(), 7.0);
        assert_eq!(g.min_height(), 0.0);
    }

    #[test]
    fn grid_rejects_mismatched_buffer() {
        let err = SampledGrid::new(vec![0.0; 5], 2, 1.0).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(SampledGrid::new(vec![0.0; 9], 3, 1.0).is_ok());
    }

    #[test]
    fn grid_values_mut_keeps_shape() {
        let mut g = SampledGrid::flat(2, 1.0).unwrap();
        for v in g.values_mut() {
            *v += 1.5;
        }
        assert_eq!(g.values(), &[1.5; 4]);
        assert_eq!(g.row(1), &[1.5, 1.5]);
    }
}
