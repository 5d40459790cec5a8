//! # evalset - Incremental Evaluation Metrics
//!
//! evalset accumulates model quality metrics batch by batch during training
//! and validation. Each metric keeps running sums, so arbitrarily many
//! batches can be evaluated without retaining predictions, and any metric
//! can be reduced to a scalar score at any time.
//!
//! ## Quick Start
//!
//! ```rust
//! use evalset::metrics::MetricSet;
//! use ndarray::array;
//!
//! let mut set = MetricSet::new();
//! set.add_metric("error");
//!
//! // once per evaluation pass
//! set.clear();
//!
//! // once per batch: rows are instances, columns are class scores
//! let scores = array![[0.9, 0.1], [0.2, 0.8], [0.6, 0.4]];
//! let labels = [0.0, 1.0, 1.0];
//! set.add_eval(scores.view(), &labels).unwrap();
//!
//! assert_eq!(set.report_string("test"), "\ttest-error:0.333333");
//! ```
//!
//! ## Module Organization
//!
//! - [`builders`] - Builder for metric sets
//! - [`config`] - Serializable evaluation configuration
//! - [`error`] - Error types and result handling
//! - [`metrics`] - Metric implementations and the metric set

pub mod builders;
pub mod config;
pub mod error;
pub mod metrics;

pub use config::MetricConfig;
pub use error::{EvalError, Result};
pub use metrics::{EvalMetric, Metric, MetricKind, MetricSet};
