//! Convenience re-exports for common use.

pub use crate::agent::{Agent, Session};
pub use crate::client::{ChatClient, ChatRequest, ChatResponse, OpenAiClient, ToolDefinition};
pub use crate::config::MentorConfig;
pub use crate::error::{AiServiceError, MentorError, Result};
pub use crate::prompt::xml_prompt;
pub use crate::tools::{FunctionTool, Tool, ToolArguments, ToolParameters};
pub use crate::types::{ChatOptions, FunctionCall, Message, Role, ToolCallRequest};
