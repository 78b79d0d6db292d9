//! Fixed generation parameters for a session.

use bon::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Model parameters applied to every completion call a session makes.
///
/// Chosen once at session construction; not tunable per call.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct ChatOptions {
    #[builder(into, default = DEFAULT_MODEL.to_string())]
    pub model: String,
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
    #[builder(default = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
