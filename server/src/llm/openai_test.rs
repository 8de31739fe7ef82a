use super::*;

#[test]
fn cc_parse_text_response() {
    let json = serde_json::json!({
        "model": "gemini-2.5-flash",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hello!" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.text, "Hello!");
    assert_eq!(resp.model, "gemini-2.5-flash");
    assert_eq!(resp.finish_reason, "stop");
    assert!(!resp.truncated());
    assert_eq!(resp.input_tokens, 10);
    assert_eq!(resp.output_tokens, 5);
}

#[test]
fn cc_parse_length_finish_is_truncated() {
    let json = serde_json::json!({
        "model": "m",
        "choices": [{ "message": { "content": "trunc" }, "finish_reason": "length" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.finish_reason, "length");
    assert!(resp.truncated());
    assert_eq!(resp.input_tokens, 0);
}

#[test]
fn cc_parse_null_content_is_empty() {
    let json = serde_json::json!({
        "model": "m",
        "choices": [{ "message": { "content": null }, "finish_reason": "stop" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.text, "");
}

#[test]
fn cc_parse_missing_finish_reason_defaults_to_stop() {
    let json = serde_json::json!({ "choices": [{ "message": { "content": "{}" } }] }).to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.finish_reason, "stop");
    assert_eq!(resp.model, "");
}

#[test]
fn cc_parse_missing_choices() {
    let json = serde_json::json!({ "model": "gpt-4o", "choices": [] }).to_string();
    assert!(matches!(parse_chat_completions_response(&json), Err(LlmError::ApiParse(_))));
}

#[test]
fn cc_parse_invalid_json() {
    assert!(parse_chat_completions_response("{").is_err());
}

#[test]
fn messages_prepend_system_prompt() {
    let messages = [Message::user("diagnosis: Hypothermic")];
    let built = build_chat_completions_messages("You are a NICU assistant", &messages);
    assert_eq!(built.len(), 2);
    assert_eq!(built[0].role, "system");
    assert_eq!(built[1].role, "user");
    assert_eq!(built[1].content, "diagnosis: Hypothermic");
}

#[test]
fn messages_skip_blank_system_prompt() {
    let messages = [Message::user("hi")];
    let built = build_chat_completions_messages("  ", &messages);
    assert_eq!(built.len(), 1);
    assert_eq!(built[0].role, "user");
}

#[test]
fn client_trims_trailing_slash() {
    let timeouts = LlmTimeouts { request_secs: 5, connect_secs: 1 };
    let client = OpenAiClient::new("k".into(), "https://example.test/v1/".into(), true, timeouts).unwrap();
    assert_eq!(client.base_url, "https://example.test/v1");
}

#[test]
fn request_carries_json_response_format() {
    let messages = [Message::user("hi")];
    let msgs = build_chat_completions_messages("sys", &messages);
    let body = CcRequest {
        model: "gemini-1.5-flash",
        max_tokens: 512,
        messages: &msgs,
        response_format: Some(ResponseFormat { kind: "json_object" }),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["response_format"]["type"], "json_object");
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["max_tokens"], 512);
}

#[test]
fn request_omits_response_format_when_disabled() {
    let messages = [Message::user("hi")];
    let msgs = build_chat_completions_messages("", &messages);
    let body = CcRequest { model: "m", max_tokens: 1, messages: &msgs, response_format: None };
    let json = serde_json::to_value(&body).unwrap();
    assert!(json.get("response_format").is_none());
}
