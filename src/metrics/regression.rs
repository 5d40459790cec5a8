use ndarray::ArrayView2;

use crate::error::Result;
use super::traits::{check_labels, check_single_output, EvalMetric};

/// Root Mean Squared Error over every accumulated instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rmse {
    sum_err: f64,
    count: u64,
}

impl Rmse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl EvalMetric for Rmse {
    fn clear(&mut self) {
        self.sum_err = 0.0;
        self.count = 0;
    }

    fn check(&self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
        check_single_output(self.name(), batch)?;
        check_labels(batch, labels)
    }

    fn add_eval(&mut self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
        self.check(batch, labels)?;
        for (&pred, &label) in batch.column(0).iter().zip(labels) {
            let diff = pred - label;
            self.sum_err += (diff * diff) as f64;
            self.count += 1;
        }
        Ok(())
    }

    fn get(&self) -> f64 {
        (self.sum_err / self.count as f64).sqrt()
    }

    fn name(&self) -> &'static str {
        "rmse"
    }
}

/// Squared Pearson correlation between predictions and labels
///
/// Both values are shifted by 0.5 before they enter the running sums, which
/// keeps the sums small for scores and labels living in `[0, 1]`. The shift
/// cancels out of the final ratio.
///
/// Constant predictions or constant labels make a variance zero and the
/// result NaN or infinite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorrSqr {
    sum_x: f64,
    sum_y: f64,
    sum_xsqr: f64,
    sum_ysqr: f64,
    sum_xyprod: f64,
    count: u64,
}

impl CorrSqr {
    const OFFSET: f32 = 0.5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl EvalMetric for CorrSqr {
    fn clear(&mut self) {
        *self = Self::new();
    }

    fn check(&self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
        check_single_output(self.name(), batch)?;
        check_labels(batch, labels)
    }

    fn add_eval(&mut self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
        self.check(batch, labels)?;
        for (&pred, &label) in batch.column(0).iter().zip(labels) {
            let x = (pred - Self::OFFSET) as f64;
            let y = (label - Self::OFFSET) as f64;
            self.sum_x += x;
            self.sum_y += y;
            self.sum_xsqr += x * x;
            self.sum_ysqr += y * y;
            self.sum_xyprod += x * y;
            self.count += 1;
        }
        Ok(())
    }

    fn get(&self) -> f64 {
        let n = self.count as f64;
        let mean_x = self.sum_x / n;
        let mean_y = self.sum_y / n;
        let cov = self.sum_xyprod / n - mean_x * mean_y;
        let var_x = self.sum_xsqr / n - mean_x * mean_x;
        let var_y = self.sum_ysqr / n - mean_y * mean_y;
        cov * cov / (var_x * var_y)
    }

    fn name(&self) -> &'static str {
        "r2"
    }
}
