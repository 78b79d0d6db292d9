//! Tests for the tool system.

use mentor::error::MentorError;
use mentor::tools::{FunctionTool, Tool, ToolArguments, ToolParameters};

#[test]
fn parameter_builder_constructs_schema() {
    let params = ToolParameters::object()
        .string("query", "Search query", true)
        .number("limit", "Max results", false)
        .boolean("verbose", "Enable verbose output", false)
        .build();

    let schema = &params.schema;
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["query"]["type"], "string");
    assert_eq!(schema["properties"]["limit"]["type"], "number");
    assert_eq!(schema["required"].as_array().unwrap().len(), 1);
}

#[test]
fn parameter_builder_string_enum() {
    let params = ToolParameters::object()
        .string_enum(
            "operation",
            "The operation to perform",
            &["add", "subtract", "multiply", "divide"],
            true,
        )
        .build();

    let values = params.schema["properties"]["operation"]["enum"]
        .as_array()
        .unwrap();
    assert_eq!(values.len(), 4);
    assert_eq!(values[0], "add");
}

#[test]
fn empty_parameters_accept_nothing() {
    let params = ToolParameters::empty();
    assert_eq!(params.schema["type"], "object");
    assert!(params.schema["properties"].as_object().unwrap().is_empty());
}

#[test]
fn tool_arguments_typed_access() {
    let args = ToolArguments::new(serde_json::json!({
        "name": "Alice",
        "count": 42,
        "ratio": 0.5,
        "active": true,
        "items": [1, 2],
    }));

    assert_eq!(args.get_str("name").unwrap(), "Alice");
    assert_eq!(args.get_i64("count").unwrap(), 42);
    assert_eq!(args.get_f64("ratio").unwrap(), 0.5);
    assert!(args.get_bool("active").unwrap());
    assert_eq!(args.get_array("items").unwrap().len(), 2);
    assert_eq!(args.get_str_opt("missing"), None);
    assert!(args.get_str("missing").is_err());
}

#[test]
fn tool_arguments_deserialize_into_struct() {
    #[derive(serde::Deserialize, PartialEq, Debug)]
    struct Params {
        operation: String,
        #[serde(rename = "firstNumber")]
        first_number: f64,
    }

    let args = ToolArguments::new(serde_json::json!({
        "operation": "add",
        "firstNumber": 2.5,
    }));
    let params: Params = args.deserialize().unwrap();
    assert_eq!(params.operation, "add");
    assert_eq!(params.first_number, 2.5);
}

#[tokio::test]
async fn function_tool_executes_handler() {
    let tool = FunctionTool::new(
        "greet",
        "Greets someone",
        ToolParameters::object()
            .string("who", "Who to greet", true)
            .build(),
        |args| async move {
            let who = args.get_str("who")?;
            Ok(serde_json::json!(format!("Hello, {who}!")))
        },
    );

    assert_eq!(tool.name(), "greet");
    assert_eq!(tool.description(), "Greets someone");

    let result = tool
        .execute(ToolArguments::new(serde_json::json!({"who": "Ada"})))
        .await
        .unwrap();
    assert_eq!(result, serde_json::json!("Hello, Ada!"));
}

#[tokio::test]
async fn function_tool_wraps_handler_errors() {
    let tool = FunctionTool::new(
        "divide",
        "Divides numbers",
        ToolParameters::object()
            .number("divisor", "The divisor", true)
            .build(),
        |args| async move {
            if args.get_f64("divisor")? == 0.0 {
                return Err(MentorError::InvalidArgument("Cannot divide by zero".into()));
            }
            Ok(serde_json::json!(1.0))
        },
    );

    let err = tool
        .execute(ToolArguments::new(serde_json::json!({"divisor": 0.0})))
        .await
        .unwrap_err();

    match err {
        MentorError::ToolExecution { tool_name, message } => {
            assert_eq!(tool_name, "divide");
            assert!(message.contains("Cannot divide by zero"));
        }
        other => panic!("expected ToolExecution, got {other:?}"),
    }
}
