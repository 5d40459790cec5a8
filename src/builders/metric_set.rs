use crate::metrics::{MetricKind, MetricSet};
use crate::error::{Result, EvalError};

/// Builder for constructing metric sets with a fluent API
///
/// By default unknown metric names are skipped, the same way
/// [`MetricSet::add_metric`] treats them. A strict builder rejects them
/// instead, which catches misspelled names in configuration.
pub struct MetricSetBuilder {
    names: Vec<String>,
    strict: bool,
}

impl MetricSetBuilder {
    /// Create a new metric set builder
    pub fn new() -> Self {
        MetricSetBuilder {
            names: Vec::new(),
            strict: false,
        }
    }

    /// Add a metric by name
    pub fn metric(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }

    /// Add several metrics by name
    pub fn metrics<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names.extend(names.into_iter().map(|name| name.as_ref().to_string()));
        self
    }

    /// Fail the build on unknown metric names
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the metric set
    pub fn build(self) -> Result<MetricSet> {
        let mut set = MetricSet::new();
        for name in &self.names {
            match MetricKind::from_name(name) {
                Some(kind) => set.add_kind(kind),
                None if self.strict => {
                    return Err(EvalError::InvalidParameter {
                        name: "metric".to_string(),
                        reason: format!("unknown metric '{}'", name),
                    });
                }
                None => set.add_metric(name),
            }
        }
        Ok(set)
    }
}

impl Default for MetricSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
