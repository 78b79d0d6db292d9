//! Session: one conversation thread and its orchestration loop.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::client::{ChatClient, ChatRequest, OpenAiClient};
use crate::config::MentorConfig;
use crate::error::{self, AiServiceError, MentorError, Result};
use crate::tools::validation::validate_arguments;
use crate::tools::{Tool, ToolArguments};
use crate::types::{ChatOptions, Message};

use super::agent::Agent;

/// A stateful conversation thread bound to an [`Agent`].
///
/// The session owns an append-only history whose first entry is always the
/// agent's system prompt. It is a single-writer structure: at most one
/// `send_message` may be in flight at a time, which `&mut self` enforces.
pub struct Session {
    agent: Agent,
    client: Arc<dyn ChatClient>,
    options: ChatOptions,
    history: Vec<Message>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("options", &self.options)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session talking to the OpenAI endpoint described by
    /// `config`.
    ///
    /// A missing API credential fails here, synchronously, before any
    /// history exists.
    pub fn connect(agent: Agent, config: &MentorConfig, options: ChatOptions) -> Result<Self> {
        let api_key = config.require_api_key()?;
        let client = OpenAiClient::new(api_key, config.base_url().map(str::to_string));
        Ok(Self::with_client(agent, Arc::new(client), options))
    }

    /// Create a session over an arbitrary [`ChatClient`].
    pub fn with_client(agent: Agent, client: Arc<dyn ChatClient>, options: ChatOptions) -> Self {
        let history = vec![Message::system(agent.system_prompt())];
        Self {
            agent,
            client,
            options,
            history,
        }
    }

    /// Append a message to the history without any role-sequencing checks.
    pub fn add_message(&mut self, message: Message) {
        self.history.push(message);
    }

    /// Send a message and resolve the agent's reply.
    ///
    /// The input is appended to history (any role is accepted) and the
    /// model is invoked. When it requests tool calls, the matching tools
    /// are executed and their results fed back for exactly one further
    /// completion. The reply is appended to history and returned.
    ///
    /// Every runtime failure surfaces as the same opaque
    /// [`AiServiceError`]; the cause is logged, not exposed.
    pub async fn send_message(
        &mut self,
        message: Message,
    ) -> std::result::Result<Message, AiServiceError> {
        self.add_message(message);
        self.exchange().await.map_err(error::to_public)
    }

    async fn exchange(&mut self) -> Result<Message> {
        let tool_defs = self.agent.tool_definitions();
        let request = ChatRequest {
            messages: self.history.clone(),
            options: self.options.clone(),
            tools: if tool_defs.is_empty() {
                None
            } else {
                Some(tool_defs)
            },
        };

        debug!(agent = self.agent.name(), "sending message");
        let response = self.client.complete(&request).await?;
        let reply = response.into_message().ok_or(MentorError::NoResponse)?;

        if !reply.has_tool_calls() {
            self.history.push(reply.clone());
            return Ok(reply);
        }

        // Resolve every requested tool before running any of them.
        let mut invocations = Vec::with_capacity(reply.tool_calls.len());
        for call in &reply.tool_calls {
            let tool = self
                .agent
                .find_tool(&call.function.name)
                .ok_or_else(|| MentorError::ToolNotFound(call.function.name.clone()))?;
            invocations.push((
                call.id.clone(),
                Arc::clone(tool),
                call.function.arguments.clone(),
            ));
        }

        // The whole batch runs concurrently and is all-or-nothing: if any
        // call fails, no assistant or tool messages are appended.
        let results = try_join_all(invocations.into_iter().map(execute_call)).await?;

        self.history
            .push(Message::assistant_tool_calls(reply.tool_calls.clone()));
        for (id, output) in results {
            self.history.push(Message::tool_result(id, output));
        }

        // Second pass advertises no tools; a further round of tool calls
        // would be treated as final content.
        let request = ChatRequest {
            messages: self.history.clone(),
            options: self.options.clone(),
            tools: None,
        };
        let response = self.client.complete(&request).await?;
        let final_reply = response.into_message().ok_or(MentorError::NoFinalResponse)?;

        self.history.push(final_reply.clone());
        Ok(final_reply)
    }

    /// The conversation history, oldest first. Read-only view.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// The agent this session is bound to.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }
}

/// Parse, validate, and execute one tool call; the result comes back
/// serialized, ready to append as a tool message.
async fn execute_call(
    (id, tool, raw_args): (String, Arc<dyn Tool>, String),
) -> Result<(String, String)> {
    let args: serde_json::Value = serde_json::from_str(&raw_args)?;
    validate_arguments(&args, &tool.parameters().schema)?;
    debug!(tool = tool.name(), "executing tool call");
    let output = tool.execute(ToolArguments::new(args)).await?;
    Ok((id, serde_json::to_string(&output)?))
}
