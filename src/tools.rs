use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::config::DiscordConfig;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Discord API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// Posts `message` to the configured channel via Discord's HTTP API.
pub async fn send_discord_message(config: &DiscordConfig, message: &str) -> Result<(), ToolError> {
    if config.token.trim().is_empty() {
        return Err(ToolError::InvalidInput("Discord bot token is not set in the .env file."));
    }
    if config.channel_id.trim().is_empty() {
        return Err(ToolError::InvalidInput("Discord channel ID is not set in the .env file."));
    }
    if message.is_empty() {
        return Err(ToolError::InvalidInput("Message cannot be empty."));
    }

    let url = format!(
        "{}/channels/{}/messages",
        config.api_base.trim_end_matches('/'),
        config.channel_id
    );
    let response = reqwest::Client::new()
        .post(url)
        .header("Authorization", format!("Bot {}", config.token))
        .json(&json!({ "content": message }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ToolError::Api {
            status: status.as_u16(),
            body,
        });
    }
    info!("Message sent: {}", message);
    Ok(())
}
