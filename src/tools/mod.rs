//! Tool system: schema-described local functions the model can invoke.

pub mod arguments;
pub mod tool;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use tool::{FunctionTool, Tool};
pub use types::ToolParameters;
