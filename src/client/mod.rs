//! Chat-completion client trait and implementations.

pub mod http;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{ChatOptions, Message};

pub use openai::OpenAiClient;

/// A request sent to a chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub options: ChatOptions,
    /// Advertised callable functions. `None` means no tool directive at
    /// all; `Some` implies `tool_choice: auto`.
    pub tools: Option<Vec<ToolDefinition>>,
}

/// Tool advertisement sent to the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// A response from a chat-completion endpoint: a list of candidate
/// completions. The session consumes only the first choice's message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    /// The first candidate's message, if any was returned.
    pub fn into_message(self) -> Option<Message> {
        self.choices.into_iter().next().map(|c| c.message)
    }
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Message,
}

/// Remote chat-completion endpoint.
///
/// Implementations must be usable from many sessions concurrently; all
/// per-conversation state lives in the session, not the client.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Request a completion for the given conversation.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse>;
}
