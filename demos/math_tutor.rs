//! Math tutor walkthrough: XML-templated system prompt, one tool, a short
//! conversation with context carried across messages.

use std::sync::Arc;

use mentor::prelude::*;
use serde_json::json;

/// Tool that performs basic arithmetic. Division by zero is a tool-author
/// error and propagates through the session's tool-execution step.
fn calculate_math() -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "calculateMath",
        "Performs basic mathematical calculations",
        ToolParameters::object()
            .string_enum(
                "operation",
                "The operation to perform",
                &["add", "subtract", "multiply", "divide"],
                true,
            )
            .number("firstNumber", "The first operand", true)
            .number("secondNumber", "The second operand", true)
            .build(),
        |args| async move {
            let operation = args.get_str("operation")?.to_string();
            let first = args.get_f64("firstNumber")?;
            let second = args.get_f64("secondNumber")?;
            let result = match operation.as_str() {
                "add" => first + second,
                "subtract" => first - second,
                "multiply" => first * second,
                "divide" => {
                    if second == 0.0 {
                        return Err(MentorError::tool_execution(
                            "calculateMath",
                            "Cannot divide by zero",
                        ));
                    }
                    first / second
                }
                other => {
                    return Err(MentorError::tool_execution(
                        "calculateMath",
                        format!("Invalid operation: {other}"),
                    ))
                }
            };
            Ok(json!(result))
        },
    ))
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    let system_prompt = xml_prompt(&json!({
        "system": {
            "role": "Math Tutor",
            "style": {
                "characteristics": [
                    "Break down problems into clear, logical steps",
                    "Use relatable real-world examples",
                    "Provide positive reinforcement",
                    "Check understanding frequently",
                ],
                "approach": [
                    "Start with fundamentals before advanced concepts",
                    "Use clear, simple language",
                    "Avoid technical jargon",
                    "Include practice problems with solutions",
                    "Connect math to practical applications",
                ],
            },
            "philosophy":
                "Making mistakes is a natural part of learning. Focus on building understanding through encouragement and real-world relevance.",
        }
    }));

    let tutor = Agent::builder()
        .name("Math Tutor")
        .description("A friendly math tutor that helps students understand mathematics")
        .system_prompt(system_prompt)
        .tool(calculate_math())
        .build();

    let mut session = tutor.create_session()?;

    let response = session
        .send_message(Message::user("What is 2,320 divided by 2?"))
        .await?;
    println!("AI Response: {}", response.text());

    let follow_up = session
        .send_message(Message::user("And if we divided that by 3.4 what would we get?"))
        .await?;
    println!("AI Response: {}", follow_up.text());

    Ok(())
}
