//! Client for delivering notifications through the Telegram Bot API.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Failures while delivering a message to Telegram.
#[derive(Debug, Error)]
pub enum SendError {
    /// The request failed in transit or Telegram answered with a
    /// non-success HTTP status.
    #[error("telegram request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Telegram answered 200 but flagged the call as not ok.
    #[error("telegram rejected the message: {0}")]
    Rejected(String),
}

/// Configuration for `TelegramBot`.
#[derive(Debug, Clone)]
pub struct TelegramBotConfig {
    /// Bot API token.
    pub token: String,
    /// Identifier of the chat that receives notifications.
    pub chat_id: String,
}

/// Client for sending messages via the Telegram Bot API.
pub struct TelegramBot {
    client: reqwest::Client,
    token: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramBot {
    /// Creates a new `TelegramBot` from a shared HTTP client and configuration.
    pub fn new(client: reqwest::Client, config: TelegramBotConfig) -> Self {
        Self {
            client,
            token: config.token,
            chat_id: config.chat_id,
        }
    }

    /// Sends a text message to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<(), SendError> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.token);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        let reply: SendMessageResponse = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if !reply.ok {
            let description = reply
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(SendError::Rejected(description));
        }
        debug!(chat_id = %self.chat_id, "message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn send_message_request_shape() {
        let body = SendMessageRequest {
            chat_id: "42",
            text: "hello",
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"chat_id": "42", "text": "hello"}));
    }

    #[test]
    fn rejection_reply_deserializes() {
        let reply: SendMessageResponse =
            serde_json::from_value(json!({"ok": false, "description": "chat not found"})).unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.description.as_deref(), Some("chat not found"));
    }
}
