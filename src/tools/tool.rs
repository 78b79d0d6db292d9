//! Tool trait and closure-based tool wrapper.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use super::arguments::ToolArguments;
use super::types::ToolParameters;
use crate::error::{MentorError, Result};

/// A named, schema-described function the model can ask a session to run.
///
/// `name` is the dispatch key: it must match exactly (case-sensitive) the
/// function name the model echoes back in a tool-call request. Implementors
/// are immutable after construction and shared across sessions.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name.
    fn name(&self) -> &str;

    /// Human-readable description, shown to the model.
    fn description(&self) -> &str;

    /// Parameter schema.
    fn parameters(&self) -> &ToolParameters;

    /// Execute with arguments already validated against [`parameters`](Tool::parameters).
    ///
    /// Domain errors (e.g. division by zero) should be returned as
    /// descriptive errors; they propagate through the session's
    /// tool-execution step.
    async fn execute(&self, args: ToolArguments) -> Result<serde_json::Value>;
}

type ToolHandler = dyn Fn(ToolArguments) -> Pin<Box<dyn Future<Output = Result<serde_json::Value>> + Send>>
    + Send
    + Sync;

/// Closure-backed tool for quick tool creation.
pub struct FunctionTool {
    name: String,
    description: String,
    parameters: ToolParameters,
    handler: Arc<ToolHandler>,
}

impl FunctionTool {
    /// Create a tool from an async closure.
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ToolParameters,
        handler: F,
    ) -> Self
    where
        F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: Arc::new(move |args| Box::pin(handler(args))),
        }
    }
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: ToolArguments) -> Result<serde_json::Value> {
        (self.handler)(args).await.map_err(|e| match e {
            err @ MentorError::ToolExecution { .. } => err,
            other => MentorError::tool_execution(&self.name, other.to_string()),
        })
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}
