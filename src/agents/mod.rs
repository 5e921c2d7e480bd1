use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Llm(#[from] crate::llm::LlmError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("unknown agent '{0}'")]
    UnknownAgent(String),
    #[error("invalid flow: {0}")]
    InvalidFlow(String),
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
}

#[async_trait]
pub trait Agent {
    type Input: Send + Sync;
    type Output: Send + Sync;

    fn name(&self) -> &str;

    async fn execute(&self, input: &Self::Input) -> Result<Self::Output, AgentError>;
}

pub mod chat;

pub use chat::ChatAgent;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Agent that answers `"<name>(<input>)"` and records every input it saw.
    pub struct EchoAgent {
        pub name: String,
        pub seen: Mutex<Vec<String>>,
        pub fail_on: Option<String>,
    }

    impl EchoAgent {
        pub fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                seen: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        pub fn inputs(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Clone for EchoAgent {
        fn clone(&self) -> Self {
            Self {
                name: self.name.clone(),
                seen: Mutex::new(self.inputs()),
                fail_on: self.fail_on.clone(),
            }
        }
    }

    #[async_trait]
    impl Agent for EchoAgent {
        type Input = String;
        type Output = String;

        fn name(&self) -> &str {
            &self.name
        }

        async fn execute(&self, input: &String) -> Result<String, AgentError> {
            self.seen.lock().unwrap().push(input.clone());
            if self.fail_on.as_deref() == Some(input.as_str()) {
                let busy = crate::llm::LlmError::ServerBusy { status: 503 };
                return Err(AgentError::Llm(busy));
            }
            Ok(format!("{}({})", self.name, input))
        }
    }
}
