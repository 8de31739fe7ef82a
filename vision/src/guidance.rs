//! Care guidance attached to a diagnosis.
//!
//! The assistant model is asked for a small JSON object; everything here is
//! the deterministic half of that exchange: the prompt, cleaning and parsing
//! the reply, normalizing the nurse plan into steps, and the fallback used
//! whenever the assistant is unavailable or answers with garbage.

#[cfg(test)]
#[path = "guidance_test.rs"]
mod guidance_test;

use serde::Deserialize;
use serde_json::Value;

use crate::Diagnosis;

pub const HYPOTHERMIA_VIDEO_ID: &str = "Z42K_t-v8MY";
pub const HYPERTHERMIA_VIDEO_ID: &str = "NpRZ-p-vgoY";
pub const NORMAL_VIDEO_ID: &str = "3yS-x98Z_eU";

pub const FALLBACK_NURSE_PLAN: &str = "Error communicating with AI assistant.";
pub const FALLBACK_PARENT_MESSAGE: &str = "त्रुटि";
pub const MISSING_FIELD: &str = "N/A";

const HYPOTHERMIA_CONSIDERATIONS: [&str; 5] = [
    "Ensure infant is warm and dry immediately.",
    "Utilize skin-to-skin contact (Kangaroo Mother Care if applicable).",
    "Cover with warm blankets or use radiant warmer.",
    "Monitor temperature closely and re-evaluate frequently.",
    "Feed frequently (breastfeeding encouraged).",
];

const HYPERTHERMIA_CONSIDERATIONS: [&str; 5] = [
    "Remove excess clothing/blankets.",
    "Encourage frequent fluids (breastfeeding/formula).",
    "Cool environment (ensure good ventilation, avoid direct sun).",
    "Monitor temperature closely; avoid rapid cooling.",
    "Look for signs of dehydration.",
];

/// Instructional video recommended for a diagnosis.
#[must_use]
pub fn default_video_id(diagnosis: Diagnosis) -> &'static str {
    match diagnosis {
        Diagnosis::Hypothermic => HYPOTHERMIA_VIDEO_ID,
        Diagnosis::Hyperthermic => HYPERTHERMIA_VIDEO_ID,
        Diagnosis::Normal | Diagnosis::Unprocessable => NORMAL_VIDEO_ID,
    }
}

/// Fixed bedside considerations for at-risk diagnoses.
#[must_use]
pub fn considerations(diagnosis: Diagnosis) -> &'static [&'static str] {
    match diagnosis {
        Diagnosis::Hypothermic => &HYPOTHERMIA_CONSIDERATIONS,
        Diagnosis::Hyperthermic => &HYPERTHERMIA_CONSIDERATIONS,
        Diagnosis::Normal | Diagnosis::Unprocessable => &[],
    }
}

/// Heading shown above the considerations list.
#[must_use]
pub fn considerations_title(diagnosis: Diagnosis) -> Option<&'static str> {
    match diagnosis {
        Diagnosis::Hypothermic => Some("Hypothermia Risk - Important Considerations:"),
        Diagnosis::Hyperthermic => Some("Hyperthermia Risk - Important Considerations:"),
        Diagnosis::Normal | Diagnosis::Unprocessable => None,
    }
}

/// System prompt for the clinical assistant.
pub const SYSTEM_PROMPT: &str = "You are a clinical assistant AI supporting nurses in low-resource neonatal clinics. \
     Reply with a single valid JSON object and nothing else.";

/// User prompt asking for guidance on `diagnosis`.
#[must_use]
pub fn build_prompt(diagnosis: Diagnosis) -> String {
    format!(
        "An infant's thermal scan resulted in a diagnosis of '{label}'.\n\
         Generate a JSON object with the following three keys:\n\
         1. \"nurse_plan\": A concise, 3-step action plan for a nurse in a low-resource clinic. Each step should be a separate point.\n\
         2. \"parent_message_hindi\": A simple, reassuring explanation for a parent in Hindi.\n\
         3. \"video_id\": Provide only the YouTube video ID for a relevant instructional video. \
         For 'Hypothermic', use '{HYPOTHERMIA_VIDEO_ID}'. For 'Hyperthermic', use '{HYPERTHERMIA_VIDEO_ID}'. \
         For 'Normal', use '{NORMAL_VIDEO_ID}'.\n\
         Ensure the output is a valid JSON string.",
        label = diagnosis.label(),
    )
}

/// Guidance fields after parsing and normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guidance {
    pub nurse_plan: Vec<String>,
    pub parent_message: String,
    pub video_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GuidanceError {
    #[error("assistant reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct RawGuidance {
    #[serde(default)]
    nurse_plan: Option<Value>,
    #[serde(default)]
    parent_message_hindi: Option<String>,
    #[serde(default)]
    video_id: Option<String>,
}

/// Strip Markdown code fences and surrounding whitespace from a model reply.
#[must_use]
pub fn clean_reply(text: &str) -> String {
    text.trim().replace("```json", "").replace("```", "").trim().to_owned()
}

/// Parse an assistant reply into [`Guidance`].
///
/// Missing keys fall back to `N/A` (plan, message) or the diagnosis's default
/// video, mirroring how the dashboard tolerated partial replies.
///
/// # Errors
///
/// Returns [`GuidanceError::Json`] if the cleaned reply is not a JSON object.
pub fn parse_reply(text: &str, diagnosis: Diagnosis) -> Result<Guidance, GuidanceError> {
    let raw: RawGuidance = serde_json::from_str(&clean_reply(text))?;
    let plan = raw.nurse_plan.unwrap_or_else(|| Value::String(MISSING_FIELD.to_owned()));
    Ok(Guidance {
        nurse_plan: nurse_plan_steps(&plan, diagnosis),
        parent_message: raw.parent_message_hindi.unwrap_or_else(|| MISSING_FIELD.to_owned()),
        video_id: raw
            .video_id
            .filter(|id| is_plausible_video_id(id))
            .unwrap_or_else(|| default_video_id(diagnosis).to_owned()),
    })
}

/// Guidance used when the assistant cannot be reached or replies badly.
#[must_use]
pub fn fallback(diagnosis: Diagnosis) -> Guidance {
    Guidance {
        nurse_plan: nurse_plan_steps(&Value::String(FALLBACK_NURSE_PLAN.to_owned()), diagnosis),
        parent_message: FALLBACK_PARENT_MESSAGE.to_owned(),
        video_id: default_video_id(diagnosis).to_owned(),
    }
}

/// Normalize the assistant's `nurse_plan` value into display steps.
///
/// - arrays keep their trimmed, non-empty string items;
/// - strings split into sentences on `.`, except for unprocessable scans
///   where the text is kept line by line;
/// - anything else is rendered with its JSON string form.
#[must_use]
pub fn nurse_plan_steps(plan: &Value, diagnosis: Diagnosis) -> Vec<String> {
    match plan {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.trim().to_owned(),
                other => other.to_string(),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(text) if diagnosis != Diagnosis::Unprocessable => split_trimmed(text, '.'),
        Value::String(text) => split_trimmed(text, '\n'),
        other => split_trimmed(&other.to_string(), '\n'),
    }
}

fn split_trimmed(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// YouTube ids are 11 URL-safe characters; anything else is not embedded.
fn is_plausible_video_id(id: &str) -> bool {
    id.len() == 11 && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
