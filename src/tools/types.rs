//! Tool parameter schemas.

use serde::{Deserialize, Serialize};

/// JSON-Schema description of the input a tool accepts.
///
/// Advertised to the model verbatim and used to validate the arguments it
/// sends back before the tool's callback runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameters {
    pub schema: serde_json::Value,
}

impl ToolParameters {
    /// Wrap a raw JSON Schema value.
    pub fn from_schema(schema: serde_json::Value) -> Self {
        Self { schema }
    }

    /// A schema accepting no parameters.
    pub fn empty() -> Self {
        Self {
            schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": [],
            }),
        }
    }

    /// Start building an object schema.
    pub fn object() -> ParameterBuilder {
        ParameterBuilder {
            properties: serde_json::Map::new(),
            required: Vec::new(),
        }
    }
}

/// Builder for object parameter schemas.
pub struct ParameterBuilder {
    properties: serde_json::Map<String, serde_json::Value>,
    required: Vec<String>,
}

impl ParameterBuilder {
    /// Add a string property.
    pub fn string(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.property(name, "string", description, required, None)
    }

    /// Add a number property.
    pub fn number(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.property(name, "number", description, required, None)
    }

    /// Add a boolean property.
    pub fn boolean(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.property(name, "boolean", description, required, None)
    }

    /// Add a string property restricted to a fixed set of values.
    pub fn string_enum(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        values: &[&str],
        required: bool,
    ) -> Self {
        self.property(name, "string", description, required, Some(values))
    }

    fn property(
        mut self,
        name: impl Into<String>,
        kind: &str,
        description: impl Into<String>,
        required: bool,
        values: Option<&[&str]>,
    ) -> Self {
        let name = name.into();
        let mut prop = serde_json::json!({
            "type": kind,
            "description": description.into(),
        });
        if let Some(values) = values {
            prop["enum"] = serde_json::json!(values);
        }
        self.properties.insert(name.clone(), prop);
        if required {
            self.required.push(name);
        }
        self
    }

    /// Finish the schema.
    pub fn build(self) -> ToolParameters {
        ToolParameters {
            schema: serde_json::json!({
                "type": "object",
                "properties": self.properties,
                "required": self.required,
            }),
        }
    }
}
