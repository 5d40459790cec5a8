use evalset::{
    builders::MetricSetBuilder,
    config::MetricConfig,
    metrics::{EvalMetric, MetricSet},
    EvalError,
};
use ndarray::{array, Array2};

/// Split `scores`/`labels` into consecutive batches of at most `batch_size` rows
fn batches(scores: &Array2<f32>, labels: &[f32], batch_size: usize) -> Vec<(Array2<f32>, Vec<f32>)> {
    let mut out = Vec::new();
    let mut start = 0;
    while start < labels.len() {
        let end = (start + batch_size).min(labels.len());
        out.push((
            scores.slice(ndarray::s![start..end, ..]).to_owned(),
            labels[start..end].to_vec(),
        ));
        start = end;
    }
    out
}

#[test]
fn test_regression_evaluation_rounds() {
    let config = MetricConfig::from_json(r#"{"metrics": ["rmse", "r2"], "eval_name": "test"}"#).unwrap();
    let mut set = config.build().unwrap();

    let scores = Array2::from_shape_fn((10, 1), |(i, _)| i as f32 / 10.0);
    let labels: Vec<f32> = (0..10).map(|i| if i % 3 == 0 { 1.0 } else { 0.0 }).collect();

    let mut reports = Vec::new();
    for _round in 0..2 {
        set.clear();
        for (batch, batch_labels) in batches(&scores, &labels, 3) {
            set.add_eval(batch.view(), &batch_labels).unwrap();
        }
        reports.push(set.report_string(&config.eval_name));
    }

    // clearing between rounds makes each round independent
    assert_eq!(reports[0], reports[1]);
    assert!(reports[0].starts_with("\ttest-r2:"));
    assert!(reports[0].contains("\ttest-rmse:"));

    let mut single = MetricSet::new();
    single.add_metric("rmse");
    single.add_eval(scores.view(), &labels).unwrap();
    assert!((single.get("rmse").unwrap() - set.get("rmse").unwrap()).abs() < 1e-12);
}

#[test]
fn test_classification_evaluation() {
    let mut set = MetricSetBuilder::new().metric("error").build().unwrap();

    let scores = array![
        [0.7, 0.2, 0.1],
        [0.1, 0.1, 0.8],
        [0.3, 0.3, 0.4],
        [0.5, 0.5, 0.0],
    ];
    set.clear();
    set.add_eval(scores.slice(ndarray::s![..2, ..]), &[0.0, 2.0]).unwrap();
    set.add_eval(scores.slice(ndarray::s![2.., ..]), &[1.0, 1.0]).unwrap();

    assert_eq!(set.get("error"), Some(0.5));
    assert_eq!(set.report_string("valid"), "\tvalid-error:0.500000");
}

#[test]
fn test_mixed_metrics_reject_wide_batch() {
    let mut set = MetricSetBuilder::new()
        .metrics(["error", "rmse"])
        .build()
        .unwrap();

    let scores = array![[0.7, 0.3], [0.4, 0.6]];
    match set.add_eval(scores.view(), &[0.0, 1.0]) {
        Err(EvalError::DimensionMismatch { expected, actual }) => {
            assert!(expected.contains("rmse"));
            assert!(actual.contains('2'));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
    assert!(set.iter().all(|metric| metric.count() == 0));
}

#[test]
fn test_report_to_writer() {
    let mut set = MetricSet::new();
    for name in ["rmse", "r2", "error", "rmse", "typo"].iter() {
        set.add_metric(name);
    }
    set.add_eval(array![[0.0], [1.0], [0.0]].view(), &[0.0, 1.0, 1.0]).unwrap();

    let mut out: Vec<u8> = Vec::new();
    set.report(&mut out, "train").unwrap();
    let text = String::from_utf8(out).unwrap();

    let names: Vec<&str> = text
        .split('\t')
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let key = entry.split(':').next().unwrap();
            key.trim_start_matches("train-")
        })
        .collect();
    assert_eq!(names, vec!["error", "r2", "rmse"]);

    for metric in set.iter() {
        assert!(metric.get().is_finite());
    }
}
