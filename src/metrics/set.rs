use std::collections::BTreeMap;
use std::io::Write;

use ndarray::ArrayView2;

use crate::error::Result;
use super::traits::{EvalMetric, Metric, MetricKind};

/// An ordered set of active metrics, unique by name
///
/// Metrics are iterated in lexicographic order of their names, which fixes
/// the order of report entries regardless of the order they were added in.
///
/// # Examples
///
/// ```
/// use evalset::metrics::MetricSet;
/// use ndarray::array;
///
/// let mut set = MetricSet::new();
/// set.add_metric("rmse");
/// set.add_metric("r2");
///
/// set.clear();
/// set.add_eval(array![[1.0], [2.0], [3.0]].view(), &[1.0, 2.0, 4.0]).unwrap();
/// assert_eq!(set.names(), vec!["r2", "rmse"]);
/// assert!((set.get("rmse").unwrap() - (1.0f64 / 3.0).sqrt()).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricSet {
    metrics: BTreeMap<&'static str, Metric>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the metric called `name`
    ///
    /// Unknown names are ignored. A name that is already active is left
    /// untouched, accumulated state included, so adding is idempotent.
    pub fn add_metric(&mut self, name: &str) {
        match MetricKind::from_name(name) {
            Some(kind) => self.add_kind(kind),
            None => log::debug!("ignoring unknown metric '{}'", name),
        }
    }

    /// Activate a metric by kind
    pub fn add_kind(&mut self, kind: MetricKind) {
        if self.metrics.contains_key(kind.name()) {
            log::debug!("metric '{}' already registered", kind);
            return;
        }
        log::debug!("registering metric '{}'", kind);
        self.metrics.insert(kind.name(), kind.create());
    }

    /// Reset every metric's running sums
    pub fn clear(&mut self) {
        for metric in self.metrics.values_mut() {
            metric.clear();
        }
    }

    /// Feed the same batch to every metric
    ///
    /// Every metric validates the batch before any of them accumulates, so
    /// an error leaves all running sums as they were.
    pub fn add_eval(&mut self, batch: ArrayView2<f32>, labels: &[f32]) -> Result<()> {
        for metric in self.metrics.values() {
            metric.check(batch, labels)?;
        }
        log::trace!("accumulating {} instances into {} metrics", labels.len(), self.metrics.len());
        for metric in self.metrics.values_mut() {
            metric.add_eval(batch, labels)?;
        }
        Ok(())
    }

    /// Write one `\t<label>-<name>:<value>` entry per metric
    pub fn report<W: Write>(&self, out: &mut W, label: &str) -> Result<()> {
        for (name, metric) in &self.metrics {
            write!(out, "\t{}-{}:{:.6}", label, name, metric.get())?;
        }
        Ok(())
    }

    /// The report as a string
    pub fn report_string(&self, label: &str) -> String {
        self.metrics
            .iter()
            .map(|(name, metric)| format!("\t{}-{}:{:.6}", label, name, metric.get()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    /// Current value of a single metric
    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).map(|metric| metric.get())
    }

    /// Active metric names in report order
    pub fn names(&self) -> Vec<&'static str> {
        self.metrics.keys().copied().collect()
    }

    /// Current `(name, value)` pairs in report order
    pub fn values(&self) -> Vec<(&'static str, f64)> {
        self.metrics
            .iter()
            .map(|(&name, metric)| (name, metric.get()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.values()
    }
}
