//! Core model provider trait definitions

use async_trait::async_trait;
use std::fmt::Debug;

use crate::config::MockClientConfig;
use crate::utils::error::CredentialsError;

/// Unified model provider interface
///
/// Providers expose a name for routing and logging, and a credential probe
/// that drives a real model invocation against the supplied credentials.
#[async_trait]
pub trait ModelProvider: Send + Sync + Debug {
    /// Provider name, unique across the system
    fn name(&self) -> &'static str;

    /// Validate provider credentials
    ///
    /// Returns `CredentialsError::ValidationFailed` when the credentials are
    /// rejected by the model invocation; any other failure is surfaced as
    /// `CredentialsError::Unexpected`.
    async fn validate_provider_credentials(
        &self,
        credentials: &MockClientConfig,
    ) -> Result<(), CredentialsError>;
}
