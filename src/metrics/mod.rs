//! Evaluation metrics accumulated batch by batch
//!
//! - [`Rmse`]: root mean squared error (`"rmse"`)
//! - [`CorrSqr`]: squared Pearson correlation (`"r2"`)
//! - [`ClassError`]: arg-max classification error rate (`"error"`)
//!
//! [`MetricSet`] holds the active metrics for one evaluation pass.

pub mod classification;
pub mod regression;
pub mod set;
pub mod traits;

pub use classification::ClassError;
pub use regression::{CorrSqr, Rmse};
pub use set::MetricSet;
pub use traits::{EvalMetric, Metric, MetricKind};
