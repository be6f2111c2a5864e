//! Integration tests for the mock chat client

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::StreamExt;
use serde_json::json;

use mockllm_rs::{
    ChatCompletionRequest, FinishReason, InvokeError, MockChatClient, MockClientConfig, NoLatency,
};

use crate::common::fixtures::{
    booking_function, booking_tool, openai_config, test_client, VALID_OPENAI_KEY,
};

#[tokio::test]
async fn test_synthesized_arguments_match_required_properties_exactly() {
    let request = ChatCompletionRequest::new("gpt-4")
        .with_user_message("book me a flight")
        .with_functions(vec![booking_function()]);
    let response = test_client()
        .create(request)
        .await
        .unwrap()
        .into_completion()
        .unwrap();

    let call = response.choices[0].message.function_call.as_ref().unwrap();
    assert_eq!(call.name, "book_flight");

    let arguments: serde_json::Value = serde_json::from_str(&call.arguments).unwrap();
    let object = arguments.as_object().unwrap();

    let mut keys: Vec<_> = object.keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["budget", "cabin", "destination", "passengers", "refundable"]
    );

    assert_eq!(object["destination"], json!("kawaii"));
    assert_eq!(object["cabin"], json!("economy"));
    assert_eq!(object["passengers"], json!(114514));
    assert_eq!(object["budget"], json!(1919810.0));
    assert_eq!(object["refundable"], json!(true));
}

#[tokio::test]
async fn test_tool_call_synthesis_wraps_the_same_arguments() {
    let request = ChatCompletionRequest::new("gpt-4")
        .with_user_message("book me a flight")
        .with_tools(vec![booking_tool()]);
    let response = test_client()
        .create(request)
        .await
        .unwrap()
        .into_completion()
        .unwrap();

    let calls = response.choices[0].message.tool_calls.as_ref().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].tool_type, "function");
    assert_eq!(calls[0].function.name, "book_flight");

    let arguments: serde_json::Value = serde_json::from_str(&calls[0].function.arguments).unwrap();
    assert_eq!(arguments["cabin"], json!("economy"));
}

#[tokio::test]
async fn test_stream_is_deterministic_across_invocations() {
    let collect = || async {
        let request = ChatCompletionRequest::new("gpt-4")
            .with_user_message("hello")
            .with_streaming();
        let stream = test_client()
            .create(request)
            .await
            .unwrap()
            .into_stream()
            .unwrap();
        let chunks: Vec<_> = stream.collect().await;
        let text: String = chunks
            .iter()
            .filter_map(|chunk| chunk.choices[0].delta.content.clone())
            .collect();
        (chunks.len(), text)
    };

    let (first_len, first_text) = collect().await;
    let (second_len, second_text) = collect().await;

    assert_eq!(first_len, second_len);
    assert_eq!(first_text, second_text);
    // the final chunk contributes an empty delta, so the concatenation of
    // all deltas is exactly the literal reply text
    assert!(first_text.starts_with("Hello, world!"));
    assert_eq!(first_len, first_text.chars().count() + 1);
}

#[tokio::test]
async fn test_only_final_chunk_carries_usage() {
    let request = ChatCompletionRequest::new("gpt-4")
        .with_user_message("hello")
        .with_streaming()
        .with_functions(vec![booking_function()]);
    let stream = test_client()
        .create(request)
        .await
        .unwrap()
        .into_stream()
        .unwrap();

    let chunks: Vec<_> = stream.collect().await;
    let (last, rest) = chunks.split_last().unwrap();

    assert!(rest.iter().all(|chunk| chunk.usage.is_none()));
    assert!(last.usage.is_some());
    assert!(last.choices[0].delta.function_call.is_some());
    assert_eq!(
        last.choices[0].finish_reason,
        Some(FinishReason::FunctionCall)
    );
}

#[tokio::test]
async fn test_invalid_base_url_fails_before_any_delay() {
    // real latency source on purpose: validation must fail fast
    let client = MockChatClient::new(
        MockClientConfig::openai()
            .with_api_key(VALID_OPENAI_KEY)
            .with_api_base("not-a-url"),
    );
    let request = ChatCompletionRequest::new("gpt-4").with_user_message("hello");

    let start = Instant::now();
    let err = client.create(request).await.unwrap_err();
    assert!(start.elapsed() < Duration::from_millis(500));
    assert!(matches!(err, InvokeError::Authorization(_)));
}

#[tokio::test]
async fn test_key_shape_gate_accepts_well_formed_keys() {
    let bad = MockChatClient::with_latency(
        MockClientConfig::openai().with_api_key("bad-key"),
        Arc::new(NoLatency),
    );
    let request = ChatCompletionRequest::new("gpt-4").with_user_message("hello");
    assert!(matches!(
        bad.create(request.clone()).await.unwrap_err(),
        InvokeError::Authorization(_)
    ));

    let good = MockChatClient::with_latency(openai_config(), Arc::new(NoLatency));
    let response = good.create(request).await.unwrap().into_completion().unwrap();
    assert_eq!(response.model, "gpt-4");
}
