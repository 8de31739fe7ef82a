//! Shared analysis model for thermal infant scans.
//!
//! This crate owns the types exchanged between `server`, `client`, and `cli`:
//! the diagnosis labels, the analysis report rendered by the dashboard, and
//! the upload limits enforced on both sides of the wire. Image decoding and
//! feature extraction sit behind the default `extract` feature so the WASM
//! client can depend on the types without pulling in `image`.

pub mod guidance;
pub mod model;

#[cfg(feature = "extract")]
pub mod features;

use serde::{Deserialize, Serialize};

/// Largest accepted upload, in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME prefix every accepted upload must carry.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Returns `true` when `mime` names an image type.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with(IMAGE_MIME_PREFIX)
}

/// Returns `true` when `size` fits under [`MAX_UPLOAD_BYTES`].
#[must_use]
pub fn within_upload_limit(size: u64) -> bool {
    size <= MAX_UPLOAD_BYTES
}

/// Classifier outcome for a single scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    /// Elevated temperature pattern.
    Hyperthermic,
    /// Low temperature pattern.
    Hypothermic,
    /// Healthy temperature pattern.
    Normal,
    /// The upload could not be decoded or analyzed.
    Unprocessable,
}

impl Diagnosis {
    /// Classes the model is trained on, in dataset folder order.
    pub const TRAINABLE: [Self; 3] = [Self::Hyperthermic, Self::Hypothermic, Self::Normal];

    /// Human-readable label shown on the dashboard.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hyperthermic => "Hyperthermic",
            Self::Hypothermic => "Hypothermic",
            Self::Normal => "Normal",
            Self::Unprocessable => "Error: Could not process image",
        }
    }

    /// CSS modifier applied to the diagnosis card.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Hyperthermic => "hyperthermic",
            Self::Hypothermic => "hypothermic",
            Self::Normal => "normal",
            Self::Unprocessable => "error",
        }
    }

    /// Parse a dataset folder name (`Hyperthermic`, `Hypothermic`, `Normal`).
    #[must_use]
    pub fn from_folder(name: &str) -> Option<Self> {
        Self::TRAINABLE.into_iter().find(|d| d.label() == name)
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the dashboard renders for one analyzed upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Opaque report identifier (UUID string).
    pub id: String,
    /// Original client-side file name, for display only.
    pub file_name: String,
    pub diagnosis: Diagnosis,
    /// Ordered action steps for the attending nurse.
    pub nurse_plan: Vec<String>,
    /// Reassuring explanation for parents (Hindi).
    pub parent_message: String,
    /// YouTube video id of the instructional clip.
    pub video_id: String,
    /// Condition-specific considerations; empty for normal/unprocessable scans.
    pub considerations: Vec<String>,
}

impl AnalysisReport {
    /// Embed URL for the instructional video.
    #[must_use]
    pub fn video_embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.video_id)
    }
}
