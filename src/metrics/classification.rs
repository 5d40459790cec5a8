use ndarray::{ArrayView1, ArrayView2, Axis};

use crate::error::{EvalError, Result};
use super::traits::{check_labels, EvalMetric};

/// Fraction of instances whose arg-max class differs from the label
///
/// Each batch row is a per-class score vector; labels hold class indices
/// stored as floats and are truncated toward zero before comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassError {
    sum_err: f64,
    count: u64,
}

impl ClassError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Index of the largest score, earliest index on ties
    ///
    /// NaN scores never compare greater, so they are never selected unless
    /// they sit at index 0.
    pub fn max_index(scores: ArrayView1<f32>) -> usize {
        let mut max_idx = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[max_idx] {
                max_idx = i;
            }
        }
        max_idx
    }
}

impl EvalMetric for ClassError {
    fn clear(&mut self) {
        self.sum_err = 0.0;
        self.count = 0;
    }

    fn check(&self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
        let (_, num_classes) = batch.dim();
        if num_classes == 0 {
            return Err(EvalError::dimension_mismatch(
                "error to receive at least 1 class score per instance".to_string(),
                "0 scores per instance".to_string(),
            ));
        }
        check_labels(batch, labels)
    }

    fn add_eval(&mut self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
        self.check(batch, labels)?;
        for (scores, &label) in batch.axis_iter(Axis(0)).zip(labels) {
            if Self::max_index(scores) as i64 != label as i64 {
                self.sum_err += 1.0;
            }
            self.count += 1;
        }
        Ok(())
    }

    fn get(&self) -> f64 {
        self.sum_err / self.count as f64
    }

    fn name(&self) -> &'static str {
        "error"
    }
}
