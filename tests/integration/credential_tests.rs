//! Integration tests for provider credential validation

use std::sync::Arc;

use mockllm_rs::{
    CredentialsError, MockClientConfig, MockModelProvider, ModelProvider, NoLatency,
};

use crate::common::fixtures::{azure_config, init_tracing, openai_config};

fn provider() -> MockModelProvider {
    init_tracing();
    MockModelProvider::with_latency(Arc::new(NoLatency))
}

#[tokio::test]
async fn test_valid_openai_credentials_pass() {
    assert!(provider()
        .validate_provider_credentials(&openai_config())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_valid_azure_credentials_pass() {
    assert!(provider()
        .validate_provider_credentials(&azure_config())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_bad_api_key_is_the_expected_failure_tier() {
    let credentials = MockClientConfig::openai().with_api_key("bad-key");
    let err = provider()
        .validate_provider_credentials(&credentials)
        .await
        .unwrap_err();

    // re-raised verbatim, not wrapped as unexpected
    match err {
        CredentialsError::ValidationFailed(message) => assert_eq!(message, "Invalid api key"),
        CredentialsError::Unexpected(_) => panic!("authorization failures are expected"),
    }
}

#[tokio::test]
async fn test_bad_base_url_is_the_expected_failure_tier() {
    let credentials = openai_config().with_api_base("not-a-url");
    let err = provider()
        .validate_provider_credentials(&credentials)
        .await
        .unwrap_err();

    match err {
        CredentialsError::ValidationFailed(message) => assert_eq!(message, "Invalid base url"),
        CredentialsError::Unexpected(_) => panic!("authorization failures are expected"),
    }
}

#[tokio::test]
async fn test_short_azure_key_is_rejected() {
    let credentials = MockClientConfig::azure().with_api_key("short");
    assert!(matches!(
        provider()
            .validate_provider_credentials(&credentials)
            .await,
        Err(CredentialsError::ValidationFailed(_))
    ));
}

#[tokio::test]
async fn test_provider_has_a_stable_name() {
    assert_eq!(provider().name(), "mock");
}
