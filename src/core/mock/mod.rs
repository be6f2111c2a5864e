//! Mock chat completion generator
//!
//! A drop-in stand-in for an OpenAI-compatible chat completion endpoint.
//! Requests are validated for base-URL and API-key shape, then answered with
//! canned content — either a single completion or a simulated token-by-token
//! chunk stream — with at most one synthesized function or tool call built
//! from the first supplied descriptor.

pub mod streaming;
pub mod synthesis;


use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::{ClientKind, MockClientConfig};
use crate::core::latency::{Latency, TokioLatency};
use crate::core::models::openai::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, FinishReason,
    FunctionCall, MessageRole, ToolCall, Usage,
};
use crate::utils::error::{InvokeError, Result};

pub use streaming::ChunkStream;

/// Completion id stamped on every response and chunk
pub(crate) const COMPLETION_ID: &str = "cmpl-3QJQa5jXJ5Z5X";

/// Canned assistant reply for non-streaming completions
const SYNC_REPLY_TEXT: &str = "elaina";

/// Coarse delay simulating a full non-streaming round trip
const SYNC_DELAY: Duration = Duration::from_secs(1);

/// Minimum accepted key length for Azure-kind clients
const AZURE_MIN_KEY_LEN: usize = 18;

/// Chat model identifiers whose requests get key-shape checking.
/// Anything else is assumed to target an OpenAI-compatible third-party
/// endpoint with an arbitrary key format and is let through.
const OPENAI_CHAT_MODELS: &[&str] = &[
    "gpt-4-1106-preview",
    "gpt-4-vision-preview",
    "gpt-4",
    "gpt-4-0314",
    "gpt-4-0613",
    "gpt-4-32k",
    "gpt-4-32k-0314",
    "gpt-4-32k-0613",
    "gpt-3.5-turbo-1106",
    "gpt-3.5-turbo",
    "gpt-3.5-turbo-16k",
    "gpt-3.5-turbo-0301",
    "gpt-3.5-turbo-0613",
    "gpt-3.5-turbo-16k-0613",
];

/// Azure deployment names treated the same way
const AZURE_CHAT_MODELS: &[&str] = &["gpt35", "gpt-4v", "gpt-35-turbo"];

static BASE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("base url regex"));

static OPENAI_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^sk-[a-zA-Z0-9]{24,}$").expect("api key regex"));

/// Outcome of a mock `create` call, selected by the request's stream flag
pub enum MockCompletion {
    /// A single completion record
    Completion(ChatCompletionResponse),
    /// A lazy, finite chunk sequence
    Stream(ChunkStream),
}

impl std::fmt::Debug for MockCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MockCompletion::Completion(response) => {
                f.debug_tuple("Completion").field(response).finish()
            }
            MockCompletion::Stream(_) => f.debug_tuple("Stream").finish(),
        }
    }
}

impl MockCompletion {
    /// Unwrap the non-streaming variant
    pub fn into_completion(self) -> Option<ChatCompletionResponse> {
        match self {
            MockCompletion::Completion(response) => Some(response),
            MockCompletion::Stream(_) => None,
        }
    }

    /// Unwrap the streaming variant
    pub fn into_stream(self) -> Option<ChunkStream> {
        match self {
            MockCompletion::Stream(stream) => Some(stream),
            MockCompletion::Completion(_) => None,
        }
    }
}

/// Mock chat completion client
#[derive(Debug, Clone)]
pub struct MockChatClient {
    config: MockClientConfig,
    latency: Arc<dyn Latency>,
}

impl MockChatClient {
    /// Create a client with real simulated latency
    pub fn new(config: MockClientConfig) -> Self {
        Self::with_latency(config, Arc::new(TokioLatency))
    }

    /// Create a client with an injected latency source
    pub fn with_latency(config: MockClientConfig, latency: Arc<dyn Latency>) -> Self {
        Self { config, latency }
    }

    /// Client configuration
    pub fn config(&self) -> &MockClientConfig {
        &self.config
    }

    /// Create a chat completion
    ///
    /// Validates the configured base URL and API key shape before any delay
    /// or synthesis, then produces either a completion record or a chunk
    /// stream depending on `request.stream`.
    pub async fn create(&self, request: ChatCompletionRequest) -> Result<MockCompletion> {
        self.validate(&request)?;

        let functions = request.functions.as_deref().unwrap_or_default();
        let tools = request.tools.as_deref().unwrap_or_default();

        // at most one synthesized call, functions taking precedence
        let function_call = synthesis::generate_function_call(functions)?;
        let tool_calls = if function_call.is_none() {
            synthesis::generate_tool_calls(tools)?
        } else {
            None
        };

        debug!(
            model = %request.model,
            stream = request.stream,
            has_function_call = function_call.is_some(),
            has_tool_calls = tool_calls.is_some(),
            "serving mock completion"
        );

        if request.stream {
            Ok(MockCompletion::Stream(streaming::spawn_chunk_stream(
                request.model,
                function_call,
                tool_calls,
                self.latency.clone(),
            )))
        } else {
            self.latency.delay(SYNC_DELAY).await;
            Ok(MockCompletion::Completion(self.completion(
                request.model,
                function_call,
                tool_calls,
            )))
        }
    }

    fn validate(&self, request: &ChatCompletionRequest) -> Result<()> {
        if !BASE_URL_RE.is_match(&self.config.api_base) {
            return Err(InvokeError::Authorization("Invalid base url".to_string()));
        }

        if is_recognized_model(&request.model) {
            let key = &self.config.api_key;
            let valid = match self.config.kind {
                ClientKind::OpenAi => OPENAI_KEY_RE.is_match(key),
                ClientKind::Azure => key.len() >= AZURE_MIN_KEY_LEN,
            };
            if !valid {
                return Err(InvokeError::Authorization("Invalid api key".to_string()));
            }
        }

        Ok(())
    }

    fn completion(
        &self,
        model: String,
        function_call: Option<FunctionCall>,
        tool_calls: Option<Vec<ToolCall>>,
    ) -> ChatCompletionResponse {
        ChatCompletionResponse {
            id: COMPLETION_ID.to_string(),
            object: "chat.completion".to_string(),
            created: chrono::Utc::now().timestamp() as u64,
            model,
            system_fingerprint: Some(String::new()),
            choices: vec![ChatChoice {
                index: 0,
                message: ChatMessage {
                    role: MessageRole::Assistant,
                    content: Some(SYNC_REPLY_TEXT.to_string()),
                    name: None,
                    function_call,
                    tool_calls,
                    tool_call_id: None,
                },
                finish_reason: Some(FinishReason::ContentFilter),
            }],
            usage: Some(Usage {
                prompt_tokens: 2,
                completion_tokens: 1,
                total_tokens: 3,
            }),
        }
    }
}

fn is_recognized_model(model: &str) -> bool {
    OPENAI_CHAT_MODELS.contains(&model) || AZURE_CHAT_MODELS.contains(&model)
}
