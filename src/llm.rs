use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// Errors returned by the chat completion endpoint
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Model servers are currently busy ({status}).")]
    ServerBusy { status: u16 },

    #[error("Network connection failed: {message}")]
    NetworkError { message: String },

    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {message}")]
    ParseError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl LlmError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            LlmError::ServerBusy { status: 429 } => {
                "🚫 Rate limit exceeded. Wait before running the recipe again.".to_string()
            }
            LlmError::ServerBusy { .. } => {
                "🚫 Model servers are currently busy. Please try again in a few moments."
                    .to_string()
            }
            LlmError::NetworkError { .. } => {
                "🌐 Network connection failed. Please check your internet connection and try again."
                    .to_string()
            }
            LlmError::Timeout { seconds } => {
                format!(
                    "⏰ Request timed out after {} seconds. The server might be overloaded.",
                    seconds
                )
            }
            LlmError::ApiError { status, .. } => match *status {
                401 => "🔑 The API key was rejected. Check your .env file.".to_string(),
                403 => "🔑 The API key lacks permission for this model.".to_string(),
                404 => {
                    "❓ Model or endpoint not found. Check the base URL and model name.".to_string()
                }
                _ => format!("❌ API error ({}). Please try again later.", status),
            },
            LlmError::ParseError { .. } => {
                "⚠️ Failed to parse server response. Please try again.".to_string()
            }
            LlmError::ConfigError { message } => {
                format!("⚙️ Configuration error: {}", message)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint (OpenAI, Groq, ...)
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    config: Config,
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish()
    }
}

impl ChatClient {
    pub fn new(config: Config) -> Result<Self, LlmError> {
        config.validate().map_err(|e| LlmError::ConfigError {
            message: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("swarm-cookbook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LlmError::ConfigError {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Single prompt with no system message.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.send_messages(&[ChatMessage::user(prompt)]).await
    }

    /// Send chat messages once and return the first choice's content.
    /// Failures are returned as-is; nothing here retries.
    pub async fn send_messages(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %self.config.model, messages = messages.len(), "sending chat completion");
        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url.trim_end_matches('/')))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(handle_error_response(status, response).await);
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse API response: {}", e),
            })?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::ParseError {
                message: "No choices in API response".to_string(),
            })
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> LlmError {
        if error.is_timeout() {
            return LlmError::Timeout {
                seconds: self.config.timeout,
            };
        }

        if error.is_connect() {
            return LlmError::NetworkError {
                message: "Failed to connect to server".to_string(),
            };
        }

        let error_msg = error.to_string().to_lowercase();
        if error_msg.contains("dns") {
            return LlmError::NetworkError {
                message: "DNS resolution failed".to_string(),
            };
        }

        LlmError::NetworkError {
            message: format!("Request error: {}", error),
        }
    }
}

async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> LlmError {
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    match status {
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::BAD_GATEWAY
        | StatusCode::GATEWAY_TIMEOUT => LlmError::ServerBusy {
            status: status.as_u16(),
        },
        _ => LlmError::ApiError {
            status: status.as_u16(),
            message: error_text,
        },
    }
}
