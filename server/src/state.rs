//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the read-only classifier model, the optional LLM client and the
//! bounded store of finished analysis reports. Reports live in memory only;
//! the oldest report is evicted once the store reaches capacity.

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use vision::AnalysisReport;
use vision::model::CentroidModel;

use crate::llm::LlmChat;

// =============================================================================
// REPORT STORE
// =============================================================================

struct ReportStoreInner {
    reports: HashMap<String, AnalysisReport>,
    /// Insertion order, oldest first.
    order: VecDeque<String>,
}

/// Bounded in-memory map of report id to report.
#[derive(Clone)]
pub struct ReportStore {
    inner: Arc<RwLock<ReportStoreInner>>,
    capacity: usize,
}

impl ReportStore {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(RwLock::new(ReportStoreInner {
                reports: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            })),
            capacity,
        }
    }

    /// Store a report, evicting the oldest entries past capacity.
    /// Re-inserting an existing id replaces the report in place.
    pub async fn insert(&self, report: AnalysisReport) {
        let mut inner = self.inner.write().await;
        let id = report.id.clone();
        if inner.reports.insert(id.clone(), report).is_some() {
            return;
        }
        inner.order.push_back(id);
        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.reports.remove(&evicted);
                tracing::debug!(report_id = %evicted, "evicted analysis report");
            }
        }
    }

    pub async fn get(&self, id: &str) -> Option<AnalysisReport> {
        self.inner.read().await.reports.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.reports.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Classifier model. `None` if `MODEL_PATH` is unset or failed to load.
    pub classifier: Option<Arc<CentroidModel>>,
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub reports: ReportStore,
    /// Where accepted uploads are written, if anywhere.
    pub upload_dir: Option<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(
        classifier: Option<CentroidModel>,
        llm: Option<Arc<dyn LlmChat>>,
        report_capacity: usize,
        upload_dir: Option<PathBuf>,
    ) -> Self {
        Self { classifier: classifier.map(Arc::new), llm, reports: ReportStore::new(report_capacity), upload_dir }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use vision::Diagnosis;
    use vision::model::ClassCentroid;

    /// A model with one centroid per trainable class.
    ///
    /// Centroids are far apart along the first three axes, so a feature
    /// vector of all zeros lands nearest to `Normal` (the smallest offset).
    #[must_use]
    pub fn test_model() -> CentroidModel {
        let len = vision::features::FEATURE_LEN;
        let centroid = |axis: usize, value: f32| {
            let mut v = vec![0.0; len];
            v[axis] = value;
            v
        };
        CentroidModel {
            version: vision::model::MODEL_FORMAT_VERSION,
            feature_len: len,
            classes: vec![
                ClassCentroid { diagnosis: Diagnosis::Hyperthermic, centroid: centroid(0, 10.0), samples: 1 },
                ClassCentroid { diagnosis: Diagnosis::Hypothermic, centroid: centroid(1, 10.0), samples: 1 },
                ClassCentroid { diagnosis: Diagnosis::Normal, centroid: centroid(2, 0.5), samples: 1 },
            ],
        }
    }

    /// App state with the test model and no LLM.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Some(test_model()), None, 8, None)
    }

    /// App state with the test model and a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(test_model()), Some(llm), 8, None)
    }

    /// App state without a classifier.
    #[must_use]
    pub fn test_app_state_without_model() -> AppState {
        AppState::new(None, None, 8, None)
    }

    #[must_use]
    pub fn dummy_report(id: &str) -> AnalysisReport {
        AnalysisReport {
            id: id.to_owned(),
            file_name: "scan.png".into(),
            diagnosis: Diagnosis::Normal,
            nurse_plan: vec!["Keep the infant swaddled".into()],
            parent_message: "सब ठीक है".into(),
            video_id: vision::guidance::NORMAL_VIDEO_ID.into(),
            considerations: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
