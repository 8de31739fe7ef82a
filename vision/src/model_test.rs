use super::*;

fn sample_set() -> Vec<(Diagnosis, Vec<f32>)> {
    vec![
        (Diagnosis::Hyperthermic, vec![1.0, 0.0, 0.0]),
        (Diagnosis::Hyperthermic, vec![0.8, 0.2, 0.0]),
        (Diagnosis::Hypothermic, vec![0.0, 0.0, 1.0]),
        (Diagnosis::Normal, vec![0.0, 1.0, 0.0]),
        (Diagnosis::Normal, vec![0.0, 0.6, 0.4]),
    ]
}

// =============================================================
// Training
// =============================================================

#[test]
fn train_averages_samples_per_class() {
    let model = CentroidModel::train(&sample_set()).unwrap();
    assert_eq!(model.version, MODEL_FORMAT_VERSION);
    assert_eq!(model.feature_len, 3);
    assert_eq!(model.classes.len(), 3);

    let hyper = model
        .classes
        .iter()
        .find(|c| c.diagnosis == Diagnosis::Hyperthermic)
        .unwrap();
    assert_eq!(hyper.samples, 2);
    assert!((hyper.centroid[0] - 0.9).abs() < 1e-6);
    assert!((hyper.centroid[1] - 0.1).abs() < 1e-6);
}

#[test]
fn train_rejects_empty_input() {
    assert!(matches!(CentroidModel::train(&[]), Err(ModelError::Empty)));
}

#[test]
fn train_rejects_mixed_lengths() {
    let samples = vec![(Diagnosis::Normal, vec![0.0, 1.0]), (Diagnosis::Normal, vec![0.0])];
    assert!(matches!(
        CentroidModel::train(&samples),
        Err(ModelError::FeatureLength { expected: 2, actual: 1 })
    ));
}

// =============================================================
// Prediction
// =============================================================

#[test]
fn predict_returns_nearest_class() {
    let model = CentroidModel::train(&sample_set()).unwrap();
    let prediction = model.predict(&[0.05, 0.05, 0.9]).unwrap();
    assert_eq!(prediction.diagnosis, Diagnosis::Hypothermic);
    assert!(prediction.distance < 0.2);
}

#[test]
fn predict_centroid_maps_to_its_own_class() {
    let model = CentroidModel::train(&sample_set()).unwrap();
    for class in &model.classes {
        let prediction = model.predict(&class.centroid).unwrap();
        assert_eq!(prediction.diagnosis, class.diagnosis);
        assert!(prediction.distance.abs() < 1e-6);
    }
}

#[test]
fn predict_rejects_wrong_length() {
    let model = CentroidModel::train(&sample_set()).unwrap();
    assert!(matches!(
        model.predict(&[1.0]),
        Err(ModelError::FeatureLength { expected: 3, actual: 1 })
    ));
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn json_round_trip_preserves_model() {
    let model = CentroidModel::train(&sample_set()).unwrap();
    let json = serde_json::to_string(&model).unwrap();
    assert_eq!(CentroidModel::from_json(&json).unwrap(), model);
}

#[test]
fn from_json_rejects_unknown_version() {
    let json = r#"{"version":99,"feature_len":1,"classes":[{"diagnosis":"Normal","centroid":[0.0],"samples":1}]}"#;
    assert!(matches!(CentroidModel::from_json(json), Err(ModelError::UnsupportedVersion(99))));
}

#[test]
fn from_json_rejects_short_centroid() {
    let json = r#"{"version":1,"feature_len":2,"classes":[{"diagnosis":"Normal","centroid":[0.0],"samples":1}]}"#;
    assert!(matches!(CentroidModel::from_json(json), Err(ModelError::FeatureLength { .. })));
}

#[test]
fn from_json_rejects_empty_classes() {
    let json = r#"{"version":1,"feature_len":2,"classes":[]}"#;
    assert!(matches!(CentroidModel::from_json(json), Err(ModelError::Empty)));
}

#[test]
fn load_reports_missing_file() {
    let result = CentroidModel::load(Path::new("/nonexistent/thermo_model.json"));
    assert!(matches!(result, Err(ModelError::Io(_))));
}

// =============================================================
// Evaluation
// =============================================================

#[test]
fn evaluation_tracks_accuracy_and_confusion() {
    let mut eval = Evaluation::default();
    eval.record(Diagnosis::Normal, Diagnosis::Normal);
    eval.record(Diagnosis::Normal, Diagnosis::Hyperthermic);
    eval.record(Diagnosis::Hypothermic, Diagnosis::Hypothermic);
    eval.record(Diagnosis::Hyperthermic, Diagnosis::Hyperthermic);

    assert_eq!(eval.total, 4);
    assert_eq!(eval.correct, 3);
    assert!((eval.accuracy() - 0.75).abs() < f64::EPSILON);
    assert_eq!(eval.matrix[2][0], 1);
    assert_eq!(eval.recall(Diagnosis::Normal), Some(0.5));
    assert_eq!(eval.precision(Diagnosis::Hyperthermic), Some(0.5));
    assert_eq!(eval.recall(Diagnosis::Unprocessable), None);
}

#[test]
fn evaluation_ignores_unprocessable_outcomes() {
    let mut eval = Evaluation::default();
    eval.record(Diagnosis::Normal, Diagnosis::Unprocessable);
    assert_eq!(eval.total, 0);
    assert!(eval.accuracy().abs() < f64::EPSILON);
    assert_eq!(eval.precision(Diagnosis::Normal), None);
}
