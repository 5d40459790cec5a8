//! Configuration for the evaluation pass
//!
//! A trainer usually reads a flat list of `key = value` pairs and hands every
//! pair to every component. [`MetricConfig::set_param`] picks out the keys it
//! understands and ignores the rest.

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};
use crate::metrics::MetricSet;

fn default_eval_name() -> String {
    "eval".to_string()
}

/// Which metrics to evaluate and how to label them in reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Metric names, in any order; duplicates and unknown names are tolerated
    #[serde(default)]
    pub metrics: Vec<String>,

    /// Label prefixed to every report entry
    #[serde(default = "default_eval_name")]
    pub eval_name: String,
}

impl MetricConfig {
    pub fn new() -> Self {
        MetricConfig {
            metrics: Vec::new(),
            eval_name: default_eval_name(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply a single `key = value` parameter
    pub fn set_param(&mut self, name: &str, value: &str) {
        match name {
            "metric" => self.metrics.push(value.to_string()),
            "eval_name" => self.eval_name = value.to_string(),
            _ => {}
        }
    }

    /// Build the metric set described by this configuration
    pub fn build(&self) -> Result<MetricSet> {
        if self.eval_name.is_empty() {
            return Err(EvalError::invalid_parameter(
                "eval_name",
                "Evaluation name must not be empty",
            ));
        }

        let mut set = MetricSet::new();
        for name in &self.metrics {
            set.add_metric(name);
        }
        Ok(set)
    }
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self::new()
    }
}
