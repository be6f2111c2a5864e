//! Client configuration
//!
//! The client kind is an explicit tag rather than something inferred from the
//! concrete client type: it selects which API-key shape rule applies.

use serde::{Deserialize, Serialize};

/// Kind of client the configuration describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    /// Standard OpenAI client (keys look like `sk-...`)
    OpenAi,
    /// Azure OpenAI client (opaque keys, minimum length only)
    Azure,
}

/// Mock client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockClientConfig {
    /// Client kind, selects the key-shape rule
    pub kind: ClientKind,
    /// API base URL
    pub api_base: String,
    /// API key
    pub api_key: String,
}

impl Default for MockClientConfig {
    fn default() -> Self {
        Self {
            kind: ClientKind::OpenAi,
            api_base: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
        }
    }
}

impl MockClientConfig {
    /// Configuration for a standard OpenAI client
    pub fn openai() -> Self {
        Self::default()
    }

    /// Configuration for an Azure OpenAI client
    pub fn azure() -> Self {
        Self {
            kind: ClientKind::Azure,
            api_base: "https://my-resource.openai.azure.com".to_string(),
            api_key: String::new(),
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
