//! XML prompt templating.
//!
//! System prompts are easier to maintain as structured data than as string
//! literals. [`xml_prompt`] renders a JSON value into the tag-delimited
//! block format the agents use:
//!
//! ```
//! use serde_json::json;
//!
//! let prompt = mentor::prompt::xml_prompt(&json!({
//!     "system": {
//!         "role": "Assistant",
//!         "style": { "tone": "friendly" },
//!     }
//! }));
//! assert_eq!(
//!     prompt,
//!     "<system>\n  <role>Assistant</role>\n  <style>\n    <tone>friendly</tone>\n  </style>\n</system>\n"
//! );
//! ```

use serde_json::Value;

/// Render a mapping into an XML-formatted prompt string.
///
/// One tag block per key; `null` values emit a self-closing tag; nested
/// mappings recurse two spaces deeper; sequences emit one child tag per
/// element, named by its positional index; scalars render inline.
pub fn xml_prompt(value: &Value) -> String {
    render(value, 0)
}

fn render(value: &Value, indent: usize) -> String {
    let spaces = " ".repeat(indent);
    let mut xml = String::new();

    for (key, child) in entries(value) {
        match child {
            Value::Null => {
                xml.push_str(&format!("{spaces}<{key}/>\n"));
            }
            Value::Object(_) | Value::Array(_) => {
                xml.push_str(&format!("{spaces}<{key}>\n"));
                xml.push_str(&render(child, indent + 2));
                xml.push_str(&format!("{spaces}</{key}>\n"));
            }
            scalar => {
                xml.push_str(&format!("{spaces}<{key}>{}</{key}>\n", scalar_text(scalar)));
            }
        }
    }

    xml
}

fn entries(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
