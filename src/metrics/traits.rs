use std::fmt;
use std::str::FromStr;

use ndarray::ArrayView2;

use crate::error::{EvalError, Result};
use super::classification::ClassError;
use super::regression::{CorrSqr, Rmse};

/// Trait defining the interface for evaluation metrics
///
/// A metric keeps running sums over every instance it has seen since the
/// last [`clear`](EvalMetric::clear), so batches can be fed one at a time
/// without keeping prediction history around.
///
/// Batches have shape `(num_instances, num_outputs)`: row `i` holds the
/// scores for instance `i`, aligned with `labels[i]`.
pub trait EvalMetric {
    /// Reset running sums to zero
    fn clear(&mut self);

    /// Validate that a batch and its labels can be accumulated by this metric
    fn check(&self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()>;

    /// Accumulate a batch into the running sums
    ///
    /// Runs [`check`](EvalMetric::check) first; on error nothing is accumulated.
    fn add_eval(&mut self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()>;

    /// Current score computed from the running sums
    ///
    /// With no accumulated instances the result is NaN.
    fn get(&self) -> f64;

    /// Fixed name token of the metric
    fn name(&self) -> &'static str;
}

/// The closed set of metrics the evaluator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    Rmse,
    CorrSqr,
    Error,
}

impl MetricKind {
    /// Every known kind, in name order
    pub const ALL: [MetricKind; 3] = [MetricKind::Error, MetricKind::CorrSqr, MetricKind::Rmse];

    /// Look up a kind by its name token; unknown names give `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rmse" => Some(MetricKind::Rmse),
            "r2" => Some(MetricKind::CorrSqr),
            "error" => Some(MetricKind::Error),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Rmse => "rmse",
            MetricKind::CorrSqr => "r2",
            MetricKind::Error => "error",
        }
    }

    /// Create a zeroed metric of this kind
    pub fn create(&self) -> Metric {
        match self {
            MetricKind::Rmse => Metric::Rmse(Rmse::new()),
            MetricKind::CorrSqr => Metric::CorrSqr(CorrSqr::new()),
            MetricKind::Error => Metric::Error(ClassError::new()),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        MetricKind::from_name(s).ok_or_else(|| {
            EvalError::invalid_parameter("metric".to_string(), format!("unknown metric '{}'", s))
        })
    }
}

/// A concrete metric of any known kind
#[derive(Debug, Clone, PartialEq)]
pub enum Metric {
    Rmse(Rmse),
    CorrSqr(CorrSqr),
    Error(ClassError),
}

impl Metric {
    pub fn kind(&self) -> MetricKind {
        match self {
            Metric::Rmse(_) => MetricKind::Rmse,
            Metric::CorrSqr(_) => MetricKind::CorrSqr,
            Metric::Error(_) => MetricKind::Error,
        }
    }

    /// Number of instances accumulated since the last clear
    pub fn count(&self) -> u64 {
        match self {
            Metric::Rmse(metric) => metric.count(),
            Metric::CorrSqr(metric) => metric.count(),
            Metric::Error(metric) => metric.count(),
        }
    }
}

impl EvalMetric for Metric {
    fn clear(&mut self) {
        match self {
            Metric::Rmse(metric) => metric.clear(),
            Metric::CorrSqr(metric) => metric.clear(),
            Metric::Error(metric) => metric.clear(),
        }
    }

    fn check(&self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
        match self {
            Metric::Rmse(metric) => metric.check(batch, labels),
            Metric::CorrSqr(metric) => metric.check(batch, labels),
            Metric::Error(metric) => metric.check(batch, labels),
        }
    }

    fn add_eval(&mut self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
        match self {
            Metric::Rmse(metric) => metric.add_eval(batch, labels),
            Metric::CorrSqr(metric) => metric.add_eval(batch, labels),
            Metric::Error(metric) => metric.add_eval(batch, labels),
        }
    }

    fn get(&self) -> f64 {
        match self {
            Metric::Rmse(metric) => metric.get(),
            Metric::CorrSqr(metric) => metric.get(),
            Metric::Error(metric) => metric.get(),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Check that every instance carries exactly one score
pub(crate) fn check_single_output(metric: &str, batch: ArrayView2<f32>) -> Result<()> {
    let (_, num_outputs) = batch.dim();
    if num_outputs != 1 {
        return Err(EvalError::dimension_mismatch(
            format!("{} to receive 1 score per instance", metric),
            format!("{} scores per instance", num_outputs),
        ));
    }
    Ok(())
}

/// Check that the labels line up with the batch's instances
pub(crate) fn check_labels(batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
    let (num_instances, _) = batch.dim();
    if labels.len() != num_instances {
        return Err(EvalError::dimension_mismatch(
            format!("{} labels", num_instances),
            format!("{} labels", labels.len()),
        ));
    }
    Ok(())
}
