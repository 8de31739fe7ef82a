//! Nearest-centroid classifier over scan feature vectors.
//!
//! DESIGN
//! ======
//! The model is a list of per-class mean vectors serialized as JSON, so a
//! trained file can be inspected, diffed, and shipped alongside the server
//! without a native ML runtime. Prediction is a Euclidean nearest-centroid
//! lookup; training is a single pass that averages labeled samples.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Diagnosis;

/// Current on-disk format version.
pub const MODEL_FORMAT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("model file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported model format version {0}")]
    UnsupportedVersion(u32),
    #[error("model has no classes")]
    Empty,
    #[error("feature length mismatch: model expects {expected}, got {actual}")]
    FeatureLength { expected: usize, actual: usize },
}

/// Mean feature vector for one diagnosis class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassCentroid {
    pub diagnosis: Diagnosis,
    pub centroid: Vec<f32>,
    /// Number of training samples averaged into `centroid`.
    pub samples: usize,
}

/// Result of classifying one feature vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub diagnosis: Diagnosis,
    /// Euclidean distance to the winning centroid.
    pub distance: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CentroidModel {
    pub version: u32,
    pub feature_len: usize,
    pub classes: Vec<ClassCentroid>,
}

impl CentroidModel {
    /// Average labeled samples into one centroid per class.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Empty`] when no samples are given and
    /// [`ModelError::FeatureLength`] when sample lengths disagree.
    pub fn train(samples: &[(Diagnosis, Vec<f32>)]) -> Result<Self, ModelError> {
        let feature_len = samples.first().map(|(_, v)| v.len()).ok_or(ModelError::Empty)?;

        // BTreeMap keyed by label keeps class order stable across runs.
        let mut sums: BTreeMap<&'static str, (Diagnosis, Vec<f64>, usize)> = BTreeMap::new();
        for (diagnosis, features) in samples {
            if features.len() != feature_len {
                return Err(ModelError::FeatureLength { expected: feature_len, actual: features.len() });
            }
            let entry = sums
                .entry(diagnosis.label())
                .or_insert_with(|| (*diagnosis, vec![0.0; feature_len], 0));
            for (acc, v) in entry.1.iter_mut().zip(features) {
                *acc += f64::from(*v);
            }
            entry.2 += 1;
        }

        let classes = sums
            .into_values()
            .map(|(diagnosis, sum, count)| ClassCentroid {
                diagnosis,
                centroid: sum.iter().map(|v| (v / count as f64) as f32).collect(),
                samples: count,
            })
            .collect();

        Ok(Self { version: MODEL_FORMAT_VERSION, feature_len, classes })
    }

    /// Parse and validate a model from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, unknown versions, empty models, or
    /// centroids whose length disagrees with `feature_len`.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Load a model file written by [`CentroidModel::save`].
    ///
    /// # Errors
    ///
    /// Same as [`CentroidModel::from_json`], plus I/O failures.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Write the model as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.version != MODEL_FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion(self.version));
        }
        if self.classes.is_empty() {
            return Err(ModelError::Empty);
        }
        for class in &self.classes {
            if class.centroid.len() != self.feature_len {
                return Err(ModelError::FeatureLength { expected: self.feature_len, actual: class.centroid.len() });
            }
        }
        Ok(())
    }

    /// Classify a feature vector by its nearest centroid.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureLength`] when `features` has the wrong size.
    pub fn predict(&self, features: &[f32]) -> Result<Prediction, ModelError> {
        if features.len() != self.feature_len {
            return Err(ModelError::FeatureLength { expected: self.feature_len, actual: features.len() });
        }
        self.classes
            .iter()
            .map(|class| Prediction { diagnosis: class.diagnosis, distance: euclidean(&class.centroid, features) })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
            .ok_or(ModelError::Empty)
    }
}

fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

/// Square confusion matrix over the trainable classes plus accuracy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// `matrix[actual][predicted]`, indexed by position in [`Diagnosis::TRAINABLE`].
    pub matrix: [[usize; 3]; 3],
    pub total: usize,
    pub correct: usize,
}

impl Evaluation {
    /// Record one labeled outcome; classes outside the trainable set are ignored.
    pub fn record(&mut self, actual: Diagnosis, predicted: Diagnosis) {
        let (Some(a), Some(p)) = (trainable_index(actual), trainable_index(predicted)) else {
            return;
        };
        self.matrix[a][p] += 1;
        self.total += 1;
        if a == p {
            self.correct += 1;
        }
    }

    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.correct as f64 / self.total as f64 }
    }

    /// Recall for one class (`None` when the class never occurred).
    #[must_use]
    pub fn recall(&self, diagnosis: Diagnosis) -> Option<f64> {
        let idx = trainable_index(diagnosis)?;
        let row: usize = self.matrix[idx].iter().sum();
        (row > 0).then(|| self.matrix[idx][idx] as f64 / row as f64)
    }

    /// Precision for one class (`None` when the class was never predicted).
    #[must_use]
    pub fn precision(&self, diagnosis: Diagnosis) -> Option<f64> {
        let idx = trainable_index(diagnosis)?;
        let column: usize = self.matrix.iter().map(|row| row[idx]).sum();
        (column > 0).then(|| self.matrix[idx][idx] as f64 / column as f64)
    }
}

fn trainable_index(diagnosis: Diagnosis) -> Option<usize> {
    Diagnosis::TRAINABLE.iter().position(|d| *d == diagnosis)
}
