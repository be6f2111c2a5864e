//! Error handling for the mock runtime
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for mock invocations
pub type Result<T> = std::result::Result<T, InvokeError>;

/// Errors raised by the mock chat client
#[derive(Error, Debug)]
pub enum InvokeError {
    /// Authorization errors (bad base URL or API key shape)
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Malformed request fixtures (bad descriptor shapes)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InvokeError {
    /// True for the authorization tier, the expected negative path in tests
    pub fn is_authorization(&self) -> bool {
        matches!(self, InvokeError::Authorization(_))
    }
}

/// Errors raised by provider credential validation
///
/// Two tiers: `ValidationFailed` is the expected domain-level outcome and
/// carries the client's message verbatim; anything else is wrapped as
/// `Unexpected` after being logged with provider context.
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// Credentials validation failed
    #[error("Credentials validation failed: {0}")]
    ValidationFailed(String),

    /// Unexpected provider failure
    #[error("Unexpected provider failure: {0}")]
    Unexpected(#[source] InvokeError),
}
