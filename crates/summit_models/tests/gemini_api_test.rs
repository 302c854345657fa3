//! Live Gemini API tests.
//!
//! Run with: cargo test --package summit_models --features api

#![cfg(feature = "gemini")]

use serde_json::json;
use summit_core::{ContentPart, ModelInvocation};
use summit_interface::ModelDriver;
use summit_models::GeminiClient;

fn api_key() -> String {
    let _ = dotenvy::dotenv();
    std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set for API tests")
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_structured_output() {
    let client = GeminiClient::new(api_key(), "gemini-2.5-flash").expect("client builds");

    let invocation = ModelInvocation::builder()
        .model("gemini-2.5-flash")
        .system_instruction("Answer tersely.")
        .parts(vec![ContentPart::Text(
            "Name one primary colour.".to_string(),
        )])
        .response_schema(json!({
            "type": "OBJECT",
            "properties": {"colour": {"type": "STRING"}},
            "required": ["colour"]
        }))
        .grounding(false)
        .build()
        .expect("Valid invocation");

    let reply = client.invoke(&invocation).await.expect("API call succeeded");

    let text = reply.text().clone().expect("model returned text");
    let value: serde_json::Value = serde_json::from_str(&text).expect("JSON output");
    assert!(value["colour"].is_string());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_rejects_bad_key() {
    let client = GeminiClient::new("not-a-real-key", "gemini-2.5-flash").expect("client builds");

    let invocation = ModelInvocation::builder()
        .model("gemini-2.5-flash")
        .system_instruction("")
        .parts(vec![ContentPart::Text("hello".to_string())])
        .response_schema(json!({"type": "STRING"}))
        .grounding(false)
        .build()
        .expect("Valid invocation");

    let err = client.invoke(&invocation).await.unwrap_err();
    assert!(err.to_string().contains("Gemini Error"));
}
