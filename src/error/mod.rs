//! Error types for Mentor.

use thiserror::Error;

/// Internal error taxonomy for all Mentor operations.
///
/// Runtime failures inside [`Session::send_message`](crate::agent::Session::send_message)
/// never reach the caller in this form; they are collapsed into
/// [`AiServiceError`] at a single boundary. Configuration errors are the
/// exception and propagate as-is.
#[derive(Error, Debug)]
pub enum MentorError {
    #[error("{0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No response received from AI")]
    NoResponse,

    #[error("No response received from AI after tool execution")]
    NoFinalResponse,

    #[error("Tool {0} not found")]
    ToolNotFound(String),

    #[error("Tool execution error: {tool_name}: {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MentorError {
    /// Create an API error for a given status code.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a tool execution error.
    pub fn tool_execution(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolExecution {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MentorError>;

/// Opaque, user-safe failure returned by `send_message`.
///
/// The display string is fixed regardless of what went wrong upstream; the
/// underlying kind is kept only for local diagnostics (Debug output and the
/// log line emitted at the collapse boundary).
#[derive(Debug)]
pub struct AiServiceError {
    kind: MentorError,
}

impl AiServiceError {
    /// The internal kind, for diagnostics in tests and logs.
    pub fn kind(&self) -> &MentorError {
        &self.kind
    }
}

impl std::fmt::Display for AiServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Failed to get response from AI. Please try again.")
    }
}

impl std::error::Error for AiServiceError {}

/// Collapse an internal error into the public [`AiServiceError`].
///
/// The single catch boundary for `send_message`: the cause is logged here
/// and nowhere else.
pub(crate) fn to_public(err: MentorError) -> AiServiceError {
    tracing::error!(error = %err, "Error communicating with AI");
    AiServiceError { kind: err }
}
