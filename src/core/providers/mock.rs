//! Mock model provider
//!
//! Validates provider credentials by driving the mock chat client with a
//! fixed canonical model, the same way a real provider probes its upstream.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::config::MockClientConfig;
use crate::core::latency::{Latency, TokioLatency};
use crate::core::mock::MockChatClient;
use crate::core::models::openai::ChatCompletionRequest;
use crate::core::traits::ModelProvider;
use crate::utils::error::{CredentialsError, InvokeError};

/// Model used for credential validation probes
const VALIDATION_MODEL: &str = "gpt-3.5-turbo";

/// Provider backed by the mock chat client
#[derive(Debug, Clone)]
pub struct MockModelProvider {
    latency: Arc<dyn Latency>,
}

impl MockModelProvider {
    /// Create a provider with real simulated latency
    pub fn new() -> Self {
        Self::with_latency(Arc::new(TokioLatency))
    }

    /// Create a provider with an injected latency source
    pub fn with_latency(latency: Arc<dyn Latency>) -> Self {
        Self { latency }
    }
}

impl Default for MockModelProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelProvider for MockModelProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn validate_provider_credentials(
        &self,
        credentials: &MockClientConfig,
    ) -> Result<(), CredentialsError> {
        let client = MockChatClient::with_latency(credentials.clone(), self.latency.clone());
        let request = ChatCompletionRequest::new(VALIDATION_MODEL).with_user_message("ping");

        match client.create(request).await {
            Ok(_) => Ok(()),
            Err(InvokeError::Authorization(message)) => {
                Err(CredentialsError::ValidationFailed(message))
            }
            Err(err) => {
                error!(provider = self.name(), error = %err, "credentials validate failed");
                Err(CredentialsError::Unexpected(err))
            }
        }
    }
}
