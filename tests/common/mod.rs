//! Shared test helpers and mock chat client.

use std::sync::Mutex;

use async_trait::async_trait;

use mentor::client::{ChatClient, ChatRequest, ChatResponse, Choice};
use mentor::error::Result;
use mentor::types::{Message, ToolCallRequest};

/// A mock chat client that returns canned responses and captures every
/// request it receives.
#[derive(Default)]
pub struct MockClient {
    responses: Mutex<Vec<ChatResponse>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an assistant text reply.
    pub fn queue_reply(&self, text: &str) {
        self.responses.lock().unwrap().push(ChatResponse {
            choices: vec![Choice {
                message: Message::assistant(text),
            }],
        });
    }

    /// Queue an assistant reply carrying tool-call requests.
    pub fn queue_tool_calls(&self, calls: Vec<(&str, &str, &str)>) {
        let calls = calls
            .into_iter()
            .map(|(id, name, args)| ToolCallRequest::function(id, name, args))
            .collect();
        self.responses.lock().unwrap().push(ChatResponse {
            choices: vec![Choice {
                message: Message::assistant_tool_calls(calls),
            }],
        });
    }

    /// Queue a response with zero choices.
    pub fn queue_empty(&self) {
        self.responses
            .lock()
            .unwrap()
            .push(ChatResponse { choices: vec![] });
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for MockClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(ChatResponse {
                choices: vec![Choice {
                    message: Message::assistant("Mock response"),
                }],
            });
        }
        Ok(responses.remove(0))
    }
}
