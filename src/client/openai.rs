//! OpenAI Chat Completions API client.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;

use super::http::{bearer_headers, shared_client, status_to_error};
use super::{ChatClient, ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for the `/chat/completions` endpoint.
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn build_request_body(&self, request: &ChatRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": request.options.model,
            "messages": request.messages,
            "temperature": request.options.temperature,
            "max_tokens": request.options.max_tokens,
        });

        // Advertise tools only when the request carries any; the second
        // pass of a tool exchange sends none.
        if let Some(ref tools) = request.tools {
            if !tools.is_empty() {
                let tool_defs: Vec<serde_json::Value> = tools
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "type": "function",
                            "function": {
                                "name": t.name,
                                "description": t.description,
                                "parameters": t.parameters,
                            }
                        })
                    })
                    .collect();
                let obj = body.as_object_mut().unwrap();
                obj.insert("tools".into(), tool_defs.into());
                obj.insert("tool_choice".into(), "auto".into());
            }
        }

        body
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %request.options.model, "chat completion request");

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        Ok(resp.json::<ChatResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ToolDefinition;
    use crate::types::{ChatOptions, Message};

    fn request(tools: Option<Vec<ToolDefinition>>) -> ChatRequest {
        ChatRequest {
            messages: vec![Message::system("s"), Message::user("u")],
            options: ChatOptions::default(),
            tools,
        }
    }

    #[test]
    fn body_omits_tool_directives_without_tools() {
        let client = OpenAiClient::new("sk-test".into(), None);
        let body = client.build_request_body(&request(None));
        assert!(body.get("tools").is_none());
        assert!(body.get("tool_choice").is_none());
        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["max_tokens"], 1000);
    }

    #[test]
    fn body_advertises_tools_with_auto_choice() {
        let client = OpenAiClient::new("sk-test".into(), None);
        let tools = vec![ToolDefinition {
            name: "lookup".into(),
            description: "Look something up".into(),
            parameters: serde_json::json!({"type": "object", "properties": {}}),
        }];
        let body = client.build_request_body(&request(Some(tools)));
        assert_eq!(body["tool_choice"], "auto");
        assert_eq!(body["tools"][0]["type"], "function");
        assert_eq!(body["tools"][0]["function"]["name"], "lookup");
    }
}
