use super::*;

// =============================================================================
// LlmError::retryable
// =============================================================================

#[test]
fn retryable_api_request() {
    let err = LlmError::ApiRequest("conn refused".into());
    assert!(err.retryable());
}

#[test]
fn retryable_api_response_429() {
    let err = LlmError::ApiResponse { status: 429, body: "rate limited".into() };
    assert!(err.retryable());
}

#[test]
fn retryable_api_response_503() {
    let err = LlmError::ApiResponse { status: 503, body: "unavailable".into() };
    assert!(err.retryable());
}

#[test]
fn not_retryable_api_response_401() {
    let err = LlmError::ApiResponse { status: 401, body: "unauthorized".into() };
    assert!(!err.retryable());
}

#[test]
fn not_retryable_config_errors() {
    assert!(!LlmError::ConfigParse("bad".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "KEY".into() }.retryable());
    assert!(!LlmError::ApiParse("json".into()).retryable());
    assert!(!LlmError::HttpClientBuild("tls".into()).retryable());
}

#[test]
fn display_includes_status() {
    let err = LlmError::ApiResponse { status: 502, body: String::new() };
    assert_eq!(err.to_string(), "API response error: status 502");
}

// =============================================================================
// ChatResponse::truncated
// =============================================================================

fn response(finish_reason: &str) -> ChatResponse {
    ChatResponse {
        text: "{}".into(),
        model: "m".into(),
        finish_reason: finish_reason.into(),
        input_tokens: 1,
        output_tokens: 2,
    }
}

#[test]
fn length_finish_is_truncated() {
    assert!(response("length").truncated());
}

#[test]
fn stop_finish_is_complete() {
    assert!(!response("stop").truncated());
}

#[test]
fn message_user_sets_role() {
    let msg = Message::user("hello");
    assert_eq!(msg.role, "user");
    assert_eq!(msg.content, "hello");
}
