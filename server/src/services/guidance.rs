//! Guidance service: diagnosis → LLM prompt → care guidance.
//!
//! DESIGN
//! ======
//! Asks the configured LLM for a JSON object with the nurse plan, the
//! parent message and a video id. A retryable provider error gets exactly
//! one more attempt. Every other failure (no LLM, provider error, malformed
//! reply) degrades to the fixed fallback guidance; analysis never fails
//! because of the assistant.

use tracing::{info, warn};
use vision::Diagnosis;
use vision::guidance::{self, Guidance};

use crate::llm::LlmChat;
use crate::llm::types::{ChatResponse, LlmError, Message};

pub const GUIDANCE_MAX_TOKENS: u32 = 1024;

/// Produce care guidance for `diagnosis`.
pub async fn generate(llm: Option<&dyn LlmChat>, diagnosis: Diagnosis) -> Guidance {
    let Some(llm) = llm else {
        info!(%diagnosis, "LLM not configured; using fallback guidance");
        return guidance::fallback(diagnosis);
    };

    let response = match chat_with_retry(llm, diagnosis).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, %diagnosis, "guidance request failed");
            return guidance::fallback(diagnosis);
        }
    };

    if response.truncated() {
        warn!(%diagnosis, max_tokens = GUIDANCE_MAX_TOKENS, "guidance reply hit the token limit");
    }

    match guidance::parse_reply(&response.text, diagnosis) {
        Ok(parsed) => {
            info!(
                %diagnosis,
                model = %response.model,
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                finish_reason = %response.finish_reason,
                steps = parsed.nurse_plan.len(),
                "guidance generated"
            );
            parsed
        }
        Err(e) => {
            warn!(error = %e, %diagnosis, "guidance reply unusable");
            guidance::fallback(diagnosis)
        }
    }
}

async fn chat_with_retry(llm: &dyn LlmChat, diagnosis: Diagnosis) -> Result<ChatResponse, LlmError> {
    let messages = [Message::user(guidance::build_prompt(diagnosis))];
    match llm.chat(GUIDANCE_MAX_TOKENS, guidance::SYSTEM_PROMPT, &messages).await {
        Err(e) if e.retryable() => {
            warn!(error = %e, "retrying guidance request");
            llm.chat(GUIDANCE_MAX_TOKENS, guidance::SYSTEM_PROMPT, &messages).await
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "guidance_test.rs"]
mod tests;
