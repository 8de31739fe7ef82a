use super::*;
use test_helpers::dummy_report;

#[tokio::test]
async fn store_returns_inserted_report() {
    let store = ReportStore::new(4);
    store.insert(dummy_report("a")).await;
    let got = store.get("a").await.unwrap();
    assert_eq!(got.file_name, "scan.png");
    assert!(store.get("missing").await.is_none());
}

#[tokio::test]
async fn store_evicts_oldest_past_capacity() {
    let store = ReportStore::new(2);
    store.insert(dummy_report("a")).await;
    store.insert(dummy_report("b")).await;
    store.insert(dummy_report("c")).await;
    assert_eq!(store.len().await, 2);
    assert!(store.get("a").await.is_none());
    assert!(store.get("b").await.is_some());
    assert!(store.get("c").await.is_some());
}

#[tokio::test]
async fn store_reinsert_replaces_without_growing() {
    let store = ReportStore::new(2);
    store.insert(dummy_report("a")).await;
    let mut updated = dummy_report("a");
    updated.file_name = "second.png".into();
    store.insert(updated).await;
    store.insert(dummy_report("b")).await;
    assert_eq!(store.len().await, 2);
    assert_eq!(store.get("a").await.unwrap().file_name, "second.png");
}

#[test]
fn store_capacity_is_at_least_one() {
    assert_eq!(ReportStore::new(0).capacity(), 1);
}

#[tokio::test]
async fn clones_share_reports() {
    let state = test_helpers::test_app_state();
    let other = state.clone();
    state.reports.insert(dummy_report("shared")).await;
    assert!(other.reports.get("shared").await.is_some());
}

#[test]
fn test_model_is_valid() {
    let model = test_helpers::test_model();
    let zeros = vec![0.0; model.feature_len];
    assert_eq!(model.predict(&zeros).unwrap().diagnosis, vision::Diagnosis::Normal);
}
