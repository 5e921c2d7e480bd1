use async_trait::async_trait;
use tracing::info;

use crate::llm::{ChatClient, ChatMessage};

use super::{Agent, AgentError};

/// A persona bound to a model client. One call to `execute` is one model round trip.
#[derive(Clone, Debug)]
pub struct ChatAgent {
    agent_name: String,
    description: String,
    system_prompt: String,
    stopping_token: Option<String>,
    client: ChatClient,
}

impl ChatAgent {
    pub fn new(
        agent_name: impl Into<String>,
        system_prompt: impl Into<String>,
        client: ChatClient,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            description: String::new(),
            system_prompt: system_prompt.into(),
            stopping_token: None,
            client,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stopping_token(mut self, token: impl Into<String>) -> Self {
        self.stopping_token = Some(token.into());
        self
    }

    /// The system message actually sent: the prompt, or the description when the prompt is blank.
    pub fn effective_system_prompt(&self) -> &str {
        if self.system_prompt.trim().is_empty() {
            self.description.trim()
        } else {
            self.system_prompt.trim()
        }
    }

    fn messages(&self, task: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2);
        let system = self.effective_system_prompt();
        if !system.is_empty() {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(task));
        messages
    }
}

#[async_trait]
impl Agent for ChatAgent {
    type Input = String;
    type Output = String;

    fn name(&self) -> &str {
        &self.agent_name
    }

    async fn execute(&self, task: &String) -> Result<String, AgentError> {
        info!("{}: sending task to {}", self.agent_name, self.client.model());
        let raw = self.client.send_messages(&self.messages(task)).await?;
        Ok(cut_at_stopping_token(raw, self.stopping_token.as_deref()))
    }
}

fn cut_at_stopping_token(mut reply: String, token: Option<&str>) -> String {
    if let Some(token) = token.filter(|t| !t.is_empty())
        && let Some(pos) = reply.find(token)
    {
        reply.truncate(pos);
    }
    reply.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn stopping_token_truncates_reply() {
        let out = cut_at_stopping_token("answer here <DONE> trailing".into(), Some("<DONE>"));
        assert_eq!(out, "answer here");
        let untouched = cut_at_stopping_token("  no token  ".into(), Some("<DONE>"));
        assert_eq!(untouched, "no token");
    }

    #[tokio::test]
    async fn description_stands_in_for_blank_system_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "messages": [
                    { "role": "system", "content": "Give financial advice." },
                    { "role": "user", "content": "How do I save?" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [ { "message": { "role": "assistant", "content": "Budget. <DONE>" } } ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ChatClient::new(test_config(&server.uri())).unwrap();
        let agent = ChatAgent::new("Financial-Advisor-Agent", "", client)
            .with_description("Give financial advice.")
            .with_stopping_token("<DONE>");

        let out = agent.execute(&"How do I save?".to_string()).await.unwrap();
        assert_eq!(out, "Budget.");
        assert_eq!(agent.name(), "Financial-Advisor-Agent");
    }
}
