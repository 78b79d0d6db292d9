//! Structural validation of tool arguments against their schema.

use crate::error::{MentorError, Result};

/// Validate parsed arguments against a tool's JSON Schema.
///
/// Top-level checks only: the schema's object type, required field
/// presence, and declared property types. The first violation is reported.
pub fn validate_arguments(args: &serde_json::Value, schema: &serde_json::Value) -> Result<()> {
    if schema.get("type").and_then(|v| v.as_str()) == Some("object") && !args.is_object() {
        return Err(MentorError::InvalidArgument(format!(
            "expected object arguments, got {}",
            type_of(args)
        )));
    }

    let obj = match args.as_object() {
        Some(obj) => obj,
        None => return Ok(()),
    };

    if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
        for field in required.iter().filter_map(|f| f.as_str()) {
            if !obj.contains_key(field) {
                return Err(MentorError::InvalidArgument(format!(
                    "missing required field '{field}'"
                )));
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(|v| v.as_object()) {
        for (key, value) in obj {
            let declared = properties
                .get(key)
                .and_then(|p| p.get("type"))
                .and_then(|t| t.as_str());
            if let Some(expected) = declared {
                if !matches_type(value, expected) {
                    return Err(MentorError::InvalidArgument(format!(
                        "field '{key}' expected type '{expected}', got {}",
                        type_of(value)
                    )));
                }
            }
        }
    }

    Ok(())
}

fn matches_type(value: &serde_json::Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn type_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
