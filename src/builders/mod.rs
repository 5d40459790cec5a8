pub mod metric_set;

pub use metric_set::MetricSetBuilder;
