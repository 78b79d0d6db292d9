//! Mentor: agent, session, and tool orchestration for chat-completion APIs.
//!
//! Build an [`Agent`](agent::Agent) with a system prompt and a set of
//! [`Tool`](tools::Tool)s, open a [`Session`](agent::Session), and converse.
//! When the model requests a tool call, the session executes the matching
//! tool, feeds the result back, and resolves a final reply, capped at one
//! tool round-trip per message.
//!
//! # Quick Start
//!
//! ```no_run
//! use mentor::prelude::*;
//!
//! # async fn example() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let tutor = Agent::builder()
//!     .name("Math Tutor")
//!     .description("A friendly math tutor")
//!     .system_prompt("You are a patient math tutor.")
//!     .build();
//!
//! let mut session = tutor.create_session()?;
//! let reply = session.send_message(Message::user("What is 2 + 2?")).await?;
//! println!("{}", reply.text());
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod prompt;
pub mod tools;
pub mod types;
