//! Typed access to validated tool arguments.

use crate::error::{MentorError, Result};

/// Arguments passed to a tool callback, already parsed from the model's
/// JSON payload and validated against the tool's schema.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// The raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| MentorError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    /// Get an integer argument.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.value
            .get(key)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| MentorError::InvalidArgument(format!("Missing integer argument: {key}")))
    }

    /// Get a float argument.
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.value
            .get(key)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| MentorError::InvalidArgument(format!("Missing float argument: {key}")))
    }

    /// Get a boolean argument.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.value
            .get(key)
            .and_then(|v| v.as_bool())
            .ok_or_else(|| MentorError::InvalidArgument(format!("Missing boolean argument: {key}")))
    }

    /// Get an array argument.
    pub fn get_array(&self, key: &str) -> Result<&Vec<serde_json::Value>> {
        self.value
            .get(key)
            .and_then(|v| v.as_array())
            .ok_or_else(|| MentorError::InvalidArgument(format!("Missing array argument: {key}")))
    }

    /// Deserialize the entire arguments into a typed struct.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.value.clone()).map_err(|e| {
            MentorError::InvalidArgument(format!("Failed to deserialize arguments: {e}"))
        })
    }
}
