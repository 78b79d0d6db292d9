//! Immutable agent identity: name, system prompt, and tool set.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::ToolDefinition;
use crate::config::MentorConfig;
use crate::error::Result;
use crate::tools::Tool;
use crate::types::ChatOptions;

use super::session::Session;

/// An AI agent: a named identity with a system prompt and an ordered tool
/// set, acting as a factory for [`Session`]s.
///
/// `Agent` is a cheap-clone handle over shared immutable state; two handles
/// compare equal exactly when they refer to the same underlying agent. The
/// tool list never changes after construction, so one agent can serve any
/// number of concurrently running sessions.
#[derive(Clone)]
pub struct Agent {
    shared: Arc<AgentShared>,
}

struct AgentShared {
    name: String,
    description: String,
    system_prompt: String,
    tools: Vec<Arc<dyn Tool>>,
    // Dispatch table: exact tool name -> position in `tools`.
    tool_index: HashMap<String, usize>,
}

impl Agent {
    /// Start building an agent.
    pub fn builder() -> AgentBuilder {
        AgentBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn description(&self) -> &str {
        &self.shared.description
    }

    pub fn system_prompt(&self) -> &str {
        &self.shared.system_prompt
    }

    /// The agent's tools in advertisement order.
    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.shared.tools
    }

    /// Look up a tool by exact, case-sensitive name.
    pub fn find_tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.shared
            .tool_index
            .get(name)
            .map(|&i| &self.shared.tools[i])
    }

    /// Advertisement schemas for every tool, in insertion order.
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.shared
            .tools
            .iter()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters().schema.clone(),
            })
            .collect()
    }

    /// Create a session using environment configuration.
    ///
    /// Fails only when the required API credential is missing.
    pub fn create_session(&self) -> Result<Session> {
        self.create_session_with(&MentorConfig::from_env(), ChatOptions::default())
    }

    /// Create a session with explicit configuration and model parameters.
    pub fn create_session_with(
        &self,
        config: &MentorConfig,
        options: ChatOptions,
    ) -> Result<Session> {
        Session::connect(self.clone(), config, options)
    }
}

impl PartialEq for Agent {
    /// Identity equality: handles to the same underlying agent.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.shared.name)
            .field("description", &self.shared.description)
            .field("tools", &self.shared.tools.len())
            .finish()
    }
}

/// Builder for [`Agent`]. Construction always succeeds; `tools` defaults
/// to an empty list.
#[derive(Default)]
pub struct AgentBuilder {
    name: String,
    description: String,
    system_prompt: String,
    tools: Vec<Arc<dyn Tool>>,
}

impl AgentBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Add one tool. Insertion order is advertisement order.
    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Add several tools at once.
    pub fn tools(mut self, tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    pub fn build(self) -> Agent {
        let mut tool_index = HashMap::with_capacity(self.tools.len());
        for (i, tool) in self.tools.iter().enumerate() {
            tool_index.entry(tool.name().to_string()).or_insert(i);
        }
        Agent {
            shared: Arc::new(AgentShared {
                name: self.name,
                description: self.description,
                system_prompt: self.system_prompt,
                tools: self.tools,
                tool_index,
            }),
        }
    }
}
