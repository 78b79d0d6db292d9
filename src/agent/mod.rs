//! Agent identity and conversation sessions.

pub mod agent;
pub mod session;

pub use agent::{Agent, AgentBuilder};
pub use session::Session;
