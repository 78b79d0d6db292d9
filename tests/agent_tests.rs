//! Agent construction and identity properties.

mod common;

use std::sync::Arc;

use common::MockClient;

use mentor::agent::Agent;
use mentor::config::MentorConfig;
use mentor::tools::{FunctionTool, Tool, ToolParameters};
use mentor::types::ChatOptions;

fn sample_tool(name: &str) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        name,
        "A test tool",
        ToolParameters::object()
            .string("input", "Input to process", true)
            .build(),
        |args| async move {
            let input = args.get_str("input")?;
            Ok(serde_json::json!(format!("Processed: {input}")))
        },
    ))
}

#[test]
fn stores_supplied_fields_verbatim() {
    let agent = Agent::builder()
        .name("Test Agent")
        .description("A test agent")
        .system_prompt("You are a test assistant.")
        .tool(sample_tool("testTool"))
        .build();

    assert_eq!(agent.name(), "Test Agent");
    assert_eq!(agent.description(), "A test agent");
    assert_eq!(agent.system_prompt(), "You are a test assistant.");
    assert_eq!(agent.tools().len(), 1);
    assert_eq!(agent.tools()[0].name(), "testTool");
}

#[test]
fn tools_default_to_empty() {
    let agent = Agent::builder()
        .name("Bare")
        .description("No tools supplied")
        .system_prompt("sys")
        .build();

    assert!(agent.tools().is_empty());
}

#[test]
fn created_session_is_bound_to_the_creating_agent() {
    let agent = Agent::builder()
        .name("Owner")
        .description("session factory")
        .system_prompt("sys")
        .build();
    let config = MentorConfig::new().with_api_key("sk-test");

    let session = agent
        .create_session_with(&config, ChatOptions::default())
        .unwrap();

    assert_eq!(session.agent(), &agent);
}

#[test]
fn equality_is_identity_not_structure() {
    let build = || {
        Agent::builder()
            .name("Twin")
            .description("identical fields")
            .system_prompt("sys")
            .build()
    };
    let a = build();
    let b = build();

    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn find_tool_matches_exact_name_only() {
    let agent = Agent::builder()
        .name("Lookup")
        .description("dispatch table")
        .system_prompt("sys")
        .tool(sample_tool("calculateMath"))
        .build();

    assert!(agent.find_tool("calculateMath").is_some());
    assert!(agent.find_tool("calculatemath").is_none());
    assert!(agent.find_tool("calculate").is_none());
}

#[test]
fn tool_definitions_follow_insertion_order() {
    let agent = Agent::builder()
        .name("Ordered")
        .description("advertisement order")
        .system_prompt("sys")
        .tools([sample_tool("first"), sample_tool("second")])
        .build();

    let defs = agent.tool_definitions();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].name, "first");
    assert_eq!(defs[1].name, "second");
    assert_eq!(defs[0].parameters["type"], "object");
}

#[tokio::test]
async fn one_agent_serves_many_sessions_independently() {
    let agent = Agent::builder()
        .name("Shared")
        .description("one agent, many sessions")
        .system_prompt("sys")
        .build();

    let client_a = Arc::new(MockClient::new());
    client_a.queue_reply("for a");
    let client_b = Arc::new(MockClient::new());
    client_b.queue_reply("for b");

    let mut a = mentor::agent::Session::with_client(
        agent.clone(),
        client_a as Arc<dyn mentor::client::ChatClient>,
        ChatOptions::default(),
    );
    let mut b = mentor::agent::Session::with_client(
        agent.clone(),
        client_b as Arc<dyn mentor::client::ChatClient>,
        ChatOptions::default(),
    );

    a.send_message(mentor::types::Message::user("hi")).await.unwrap();
    b.send_message(mentor::types::Message::user("hi")).await.unwrap();

    assert_eq!(a.history().len(), 3);
    assert_eq!(b.history().len(), 3);
    assert_eq!(a.history()[2].text(), "for a");
    assert_eq!(b.history()[2].text(), "for b");
}
