//! Core data types shared across the crate.

pub mod message;
pub mod options;

pub use message::{FunctionCall, Message, Role, ToolCallRequest};
pub use options::ChatOptions;
