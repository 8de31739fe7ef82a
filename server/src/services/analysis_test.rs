use super::*;
use crate::state::test_helpers;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

fn png(rgb: [u8; 3]) -> Vec<u8> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb(rgb)))
        .write_to(&mut bytes, ImageOutputFormat::Png)
        .unwrap();
    bytes.into_inner()
}

fn upload(name: &str, bytes: Vec<u8>) -> Upload {
    Upload { file_name: name.into(), content_type: Some("image/png".into()), bytes }
}

// =========================================================================
// validate_upload
// =========================================================================

#[test]
fn blank_name_is_no_selected_file() {
    let err = validate_upload(&upload("  ", vec![1])).unwrap_err();
    assert!(matches!(err, AnalyzeError::NoSelectedFile));
    assert_eq!(err.to_string(), "No selected file");
}

#[test]
fn empty_bytes_rejected() {
    assert!(matches!(validate_upload(&upload("a.png", Vec::new())), Err(AnalyzeError::EmptyFile)));
}

#[test]
fn oversize_rejected() {
    let bytes = vec![0; usize::try_from(vision::MAX_UPLOAD_BYTES).unwrap() + 1];
    assert!(matches!(validate_upload(&upload("a.png", bytes)), Err(AnalyzeError::TooLarge)));
}

#[test]
fn exact_limit_accepted() {
    let bytes = vec![0; usize::try_from(vision::MAX_UPLOAD_BYTES).unwrap()];
    assert!(validate_upload(&upload("a.png", bytes)).is_ok());
}

// =========================================================================
// classify_bytes
// =========================================================================

#[test]
fn black_image_is_nearest_normal() {
    let model = test_helpers::test_model();
    assert_eq!(classify_bytes(&model, &png([0, 0, 0])).unwrap(), Diagnosis::Normal);
}

#[test]
fn garbage_is_unprocessable() {
    let model = test_helpers::test_model();
    assert_eq!(classify_bytes(&model, b"not an image").unwrap(), Diagnosis::Unprocessable);
}

#[test]
fn short_model_is_feature_length_error() {
    let mut model = test_helpers::test_model();
    model.feature_len = 3;
    for class in &mut model.classes {
        class.centroid.truncate(3);
    }
    let err = classify_bytes(&model, &png([0, 0, 0])).unwrap_err();
    assert!(matches!(err, ModelError::FeatureLength { .. }));
}

// =========================================================================
// build_report / stored_file_name
// =========================================================================

#[test]
fn report_carries_considerations_for_at_risk_diagnosis() {
    let report = build_report("id".into(), "s.png".into(), Diagnosis::Hyperthermic, rules::fallback(Diagnosis::Hyperthermic));
    assert_eq!(report.considerations.len(), 5);
    assert_eq!(report.video_id, rules::HYPERTHERMIA_VIDEO_ID);
}

#[test]
fn report_has_no_considerations_when_normal() {
    let report = build_report("id".into(), "s.png".into(), Diagnosis::Normal, rules::fallback(Diagnosis::Normal));
    assert!(report.considerations.is_empty());
}

#[test]
fn stored_name_ignores_client_path() {
    assert_eq!(stored_file_name("abc", "../../etc/passwd"), "abc.bin");
    assert_eq!(stored_file_name("abc", "Scan.PNG"), "abc.png");
    assert_eq!(stored_file_name("abc", "archive.tar.gz"), "abc.gz");
    assert_eq!(stored_file_name("abc", "weird.p/ng"), "abc.bin");
}

// =========================================================================
// analyze_upload
// =========================================================================

#[tokio::test]
async fn analyze_stores_report() {
    let state = test_helpers::test_app_state();
    let report = analyze_upload(&state, upload("baby.png", png([0, 0, 0]))).await.unwrap();
    assert_eq!(report.diagnosis, Diagnosis::Normal);
    assert_eq!(report.file_name, "baby.png");
    assert_eq!(state.reports.get(&report.id).await, Some(report));
}

#[tokio::test]
async fn analyze_undecodable_still_reports() {
    let state = test_helpers::test_app_state();
    let report = analyze_upload(&state, upload("baby.png", b"\x89PNG broken".to_vec())).await.unwrap();
    assert_eq!(report.diagnosis, Diagnosis::Unprocessable);
    assert_eq!(report.parent_message, rules::FALLBACK_PARENT_MESSAGE);
}

#[tokio::test]
async fn analyze_without_model_is_unavailable() {
    let state = test_helpers::test_app_state_without_model();
    let err = analyze_upload(&state, upload("baby.png", png([0, 0, 0]))).await.unwrap_err();
    assert!(matches!(err, AnalyzeError::ModelUnavailable));
}

#[tokio::test]
async fn analyze_writes_upload_under_generated_name() {
    let dir = std::env::temp_dir().join(format!("thermovision-test-{}", Uuid::new_v4()));
    let mut state = test_helpers::test_app_state();
    state.upload_dir = Some(dir.clone());
    let report = analyze_upload(&state, upload("My Baby.png", png([0, 0, 0]))).await.unwrap();
    let stored = dir.join(format!("{}.png", report.id));
    assert!(stored.exists());
    std::fs::remove_dir_all(&dir).unwrap();
}
