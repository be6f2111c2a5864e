//! # mockllm-rs
//!
//! A mock OpenAI-compatible chat completion runtime for testing LLM provider
//! integrations without network access.
//!
//! ## Features
//!
//! - **OpenAI Compatible**: request and response shapes match the real chat
//!   completion API closely enough to be substitutable in tests
//! - **Streaming Support**: simulated token-by-token chunk streams with the
//!   usage counters and call payload on the final chunk
//! - **Function/Tool Calls**: synthesizes a canned call from the first
//!   supplied descriptor by walking its required parameters
//! - **Credential Validation**: provider-level credential probing with
//!   distinct expected/unexpected failure tiers
//! - **Injectable Latency**: simulated generation delay that tests can
//!   replace with a no-op
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mockllm_rs::{ChatCompletionRequest, MockChatClient, MockClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MockClientConfig::openai()
//!         .with_api_key("sk-ib8BqGhyVUpoSz1GAY0T6g3jLkVpR0Sd");
//!     let client = MockChatClient::new(config);
//!
//!     let request = ChatCompletionRequest::new("gpt-3.5-turbo")
//!         .with_user_message("Hello, how are you?");
//!     let response = client.create(request).await?.into_completion().unwrap();
//!
//!     println!("Response: {:?}", response.choices[0].message.content);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{ClientKind, MockClientConfig};
pub use utils::error::{CredentialsError, InvokeError, Result};

// Export the mock client and its outputs
pub use crate::core::mock::{ChunkStream, MockChatClient, MockCompletion};

// Export wire types
pub use crate::core::models::openai::{
    ChatChoice, ChatChoiceDelta, ChatCompletionChunk, ChatCompletionRequest,
    ChatCompletionResponse, ChatMessage, ChatMessageDelta, FinishReason, Function, FunctionCall,
    FunctionCallDelta, MessageRole, ResponseFormat, Tool, ToolCall, ToolCallDelta, Usage,
};

// Export the provider layer
pub use crate::core::latency::{Latency, NoLatency, TokioLatency};
pub use crate::core::providers::MockModelProvider;
pub use crate::core::traits::ModelProvider;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
