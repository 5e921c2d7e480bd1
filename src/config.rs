use std::env;

use thiserror::Error;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DISCORD_API_URL: &str = "https://discord.com/api/v10";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingVar(String),

    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

/// Settings for one OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// OpenAI preset used by the workshop recipes: gpt-4o-mini, 4000 tokens, temperature 0.1.
    pub fn openai() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: required_var("OPENAI_API_KEY")?,
            base_url: env::var("OPENAI_BASE_URL").unwrap_or_else(|_| OPENAI_BASE_URL.to_string()),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 4000,
            temperature: 0.1,
            timeout: timeout_from_env()?,
        })
    }

    /// Groq preset used by the house bill recipe.
    pub fn groq() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: required_var("GROQ_API_KEY")?,
            base_url: env::var("GROQ_BASE_URL").unwrap_or_else(|_| GROQ_BASE_URL.to_string()),
            model: "llama3-8b-8192".to_string(),
            max_tokens: 1024,
            temperature: 0.5,
            timeout: timeout_from_env()?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "api_key".into(),
                message: "must not be empty".into(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                name: "base_url".into(),
                message: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "model".into(),
                message: "must not be empty".into(),
            });
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                name: "max_tokens".into(),
                message: "must be greater than zero".into(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                name: "temperature".into(),
                message: format!("{} is outside [0.0, 2.0]", self.temperature),
            });
        }
        Ok(())
    }
}

/// Credentials for the Discord HTTP API.
#[derive(Clone)]
pub struct DiscordConfig {
    pub token: String,
    pub channel_id: String,
    pub api_base: String,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("channel_id", &self.channel_id)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl DiscordConfig {
    /// Values may be empty here; `send_discord_message` rejects them before sending.
    pub fn from_env() -> Self {
        Self {
            token: env::var("DISCORD_BOT_TOKEN").unwrap_or_default(),
            channel_id: env::var("DISCORD_CHANNEL_ID").unwrap_or_default(),
            api_base: DISCORD_API_URL.to_string(),
        }
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name.to_string())),
    }
}

fn timeout_from_env() -> Result<u64, ConfigError> {
    match env::var("LLM_TIMEOUT_SECS") {
        Ok(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
            name: "LLM_TIMEOUT_SECS".into(),
            message: format!("{}", e),
        }),
        Err(_) => Ok(DEFAULT_TIMEOUT_SECS),
    }
}

#[cfg(test)]
pub(crate) fn test_config(base_url: &str) -> Config {
    Config {
        api_key: "test-key".into(),
        base_url: base_url.to_string(),
        model: "test-model".into(),
        max_tokens: 256,
        temperature: 0.1,
        timeout: 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_well_formed_config() {
        assert!(test_config("http://localhost:1234").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_key() {
        let mut cfg = test_config("http://localhost:1234");
        cfg.api_key = "  ".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn validate_rejects_bad_url_and_temperature() {
        let mut cfg = test_config("localhost:1234");
        assert!(cfg.validate().is_err());

        cfg.base_url = "https://example.com".into();
        cfg.temperature = 3.5;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let cfg = test_config("http://localhost:1234");
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("test-model"));
    }
}
