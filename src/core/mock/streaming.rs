//! Streaming chunk sequencing
//!
//! A completion is streamed as one chunk per character of the fixed reply
//! text, then a final chunk carrying the synthesized call payload and the
//! usage counters. Chunks are produced by a spawned task into a bounded
//! channel; dropping the receiving half stops the producer on its next send.

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::core::latency::Latency;
use crate::core::models::openai::{
    ChatChoiceDelta, ChatCompletionChunk, ChatMessageDelta, FinishReason, FunctionCall,
    FunctionCallDelta, MessageRole, ToolCall, ToolCallDelta, Usage,
};

use super::COMPLETION_ID;

/// Fixed literal reply streamed one character at a time
pub(crate) const STREAM_REPLY_TEXT: &str =
    "Hello, world!\n\n```python\nprint('Hello, world!')\n```";

/// Fine-grained delay before each chunk
pub(crate) const CHUNK_DELAY: Duration = Duration::from_millis(100);

/// Stream of completion chunks handed to the caller
pub type ChunkStream = Pin<Box<dyn Stream<Item = ChatCompletionChunk> + Send>>;

/// Spawn the chunk producer and return its receiving stream
pub(crate) fn spawn_chunk_stream(
    model: String,
    function_call: Option<FunctionCall>,
    tool_calls: Option<Vec<ToolCall>>,
    latency: Arc<dyn Latency>,
) -> ChunkStream {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let characters: Vec<char> = STREAM_REPLY_TEXT.chars().collect();

        for (index, character) in characters.iter().enumerate() {
            latency.delay(CHUNK_DELAY).await;
            let chunk = content_chunk(&model, index == 0, *character);
            if tx.send(chunk).await.is_err() {
                // consumer stopped pulling
                return;
            }
        }

        latency.delay(CHUNK_DELAY).await;
        let _ = tx.send(final_chunk(&model, function_call, tool_calls)).await;
    });

    Box::pin(ReceiverStream::new(rx))
}

fn chunk_envelope(model: &str, choice: ChatChoiceDelta, usage: Option<Usage>) -> ChatCompletionChunk {
    ChatCompletionChunk {
        id: COMPLETION_ID.to_string(),
        object: "chat.completion.chunk".to_string(),
        created: chrono::Utc::now().timestamp() as u64,
        model: model.to_string(),
        system_fingerprint: Some(String::new()),
        choices: vec![choice],
        usage,
    }
}

fn content_chunk(model: &str, first: bool, character: char) -> ChatCompletionChunk {
    chunk_envelope(
        model,
        ChatChoiceDelta {
            index: 0,
            delta: ChatMessageDelta {
                role: first.then_some(MessageRole::Assistant),
                content: Some(character.to_string()),
                function_call: None,
                tool_calls: None,
            },
            finish_reason: Some(FinishReason::ContentFilter),
        },
        None,
    )
}

fn final_chunk(
    model: &str,
    function_call: Option<FunctionCall>,
    tool_calls: Option<Vec<ToolCall>>,
) -> ChatCompletionChunk {
    let function_call = function_call.map(|call| FunctionCallDelta {
        name: Some(call.name),
        arguments: Some(call.arguments),
    });

    let tool_calls = tool_calls.map(|calls| {
        calls
            .into_iter()
            .enumerate()
            .map(|(index, call)| ToolCallDelta {
                index: index as u32,
                id: Some(call.id),
                tool_type: Some(call.tool_type),
                function: Some(FunctionCallDelta {
                    name: Some(call.function.name),
                    arguments: Some(call.function.arguments),
                }),
            })
            .collect()
    });

    chunk_envelope(
        model,
        ChatChoiceDelta {
            index: 0,
            delta: ChatMessageDelta {
                role: Some(MessageRole::Assistant),
                content: Some(String::new()),
                function_call,
                tool_calls,
            },
            finish_reason: Some(FinishReason::FunctionCall),
        },
        Some(Usage {
            prompt_tokens: 2,
            completion_tokens: 17,
            total_tokens: 19,
        }),
    )
}
