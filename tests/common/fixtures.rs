//! Test fixtures and factories

use std::sync::{Arc, Once};

use serde_json::json;

use mockllm_rs::{Function, MockChatClient, MockClientConfig, NoLatency, Tool};

/// A well-formed OpenAI key: `sk-` followed by 26 alphanumerics
pub const VALID_OPENAI_KEY: &str = "sk-0123456789abcdefghijklmnop";

/// An Azure key at the minimum accepted length
pub const VALID_AZURE_KEY: &str = "0123456789abcdef01";

/// Install a tracing subscriber once for the whole test binary
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// OpenAI-kind configuration with a valid key
pub fn openai_config() -> MockClientConfig {
    MockClientConfig::openai().with_api_key(VALID_OPENAI_KEY)
}

/// Azure-kind configuration with a valid key
pub fn azure_config() -> MockClientConfig {
    MockClientConfig::azure().with_api_key(VALID_AZURE_KEY)
}

/// Client over `openai_config` with latency disabled
pub fn test_client() -> MockChatClient {
    init_tracing();
    MockChatClient::with_latency(openai_config(), Arc::new(NoLatency))
}

/// A descriptor covering every synthesizable parameter type plus an
/// optional property that must never be populated
pub fn booking_function() -> Function {
    Function {
        name: "book_flight".to_string(),
        description: Some("Book a flight".to_string()),
        parameters: Some(json!({
            "type": "object",
            "properties": {
                "destination": {"type": "string"},
                "cabin": {"type": "string", "enum": ["economy", "business", "first"]},
                "passengers": {"type": "integer"},
                "budget": {"type": "number"},
                "refundable": {"type": "boolean"},
                "notes": {"type": "string"}
            },
            "required": ["destination", "cabin", "passengers", "budget", "refundable"]
        })),
    }
}

/// `booking_function` wrapped under the tools convention
pub fn booking_tool() -> Tool {
    Tool::function(booking_function())
}
