//! Minimal Telegram Bot API client: replies and webhook registration.

use async_trait::async_trait;
use safubot_application::ports::{ChatTransport, ReplyTarget};
use safubot_domain::config::TelegramConfig;
use safubot_domain::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Telegram rejects messages longer than this many UTF-16 code units.
pub const MAX_MESSAGE_UNITS: usize = 4096;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_parameters: Option<serde_json::Value>,
}

pub struct TelegramClient {
    client: reqwest::Client,
    // Contains the bot token; never log it.
    method_base: String,
}

impl TelegramClient {
    pub fn new(cfg: &TelegramConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::TransportError(e.to_string()))?;

        Ok(Self {
            client,
            method_base: format!(
                "{}/bot{}",
                cfg.api_base_url.trim_end_matches('/'),
                cfg.bot_token
            ),
        })
    }

    async fn call<B: Serialize + ?Sized>(&self, method: &str, body: &B) -> Result<(), DomainError> {
        let response = self
            .client
            .post(format!("{}/{}", self.method_base, method))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(method, error = %e, "Telegram request failed");
                DomainError::TransportError(e.to_string())
            })?;

        let status = response.status();
        let api: ApiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!(method, %status, error = %e, "Telegram response could not be decoded");
            DomainError::TransportError(e.to_string())
        })?;

        if !api.ok {
            let description = api.description.unwrap_or_else(|| status.to_string());
            error!(method, %status, %description, "Telegram rejected request");
            return Err(DomainError::TransportError(description));
        }

        debug!(method, "Telegram request succeeded");
        Ok(())
    }

    #[instrument(skip(self, text))]
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to: Option<i64>,
    ) -> Result<(), DomainError> {
        for (idx, chunk) in split_message(text, MAX_MESSAGE_UNITS).into_iter().enumerate() {
            // Only the first chunk is threaded under the user's message.
            let reply_parameters = reply_to.filter(|_| idx == 0).map(|message_id| {
                json!({ "message_id": message_id, "allow_sending_without_reply": true })
            });
            let body = SendMessage {
                chat_id,
                text: chunk,
                reply_parameters,
            };
            self.call("sendMessage", &body).await?;
        }
        Ok(())
    }

    pub async fn set_webhook(&self, url: &str) -> Result<(), DomainError> {
        self.call("setWebhook", &json!({ "url": url })).await?;
        info!(webhook_url = %url, "Webhook registered");
        Ok(())
    }

    pub async fn delete_webhook(&self) -> Result<(), DomainError> {
        self.call("deleteWebhook", &json!({})).await?;
        info!("Existing webhook removed");
        Ok(())
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn send_reply(&self, target: ReplyTarget, text: &str) -> Result<(), DomainError> {
        self.send_message(target.chat_id, text, Some(target.message_id))
            .await
    }
}

/// Splits `text` into pieces of at most `max_units` UTF-16 code units,
/// preferring to break after a newline. Empty input yields one empty piece.
pub fn split_message(text: &str, max_units: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.encode_utf16().count() > max_units {
        let hard_end = utf16_boundary(rest, max_units);
        let end = match rest[..hard_end].rfind('\n') {
            Some(nl) if nl > 0 => nl + 1,
            _ => hard_end,
        };
        chunks.push(&rest[..end]);
        rest = &rest[end..];
    }

    chunks.push(rest);
    chunks
}

/// Byte offset of the longest prefix of `text` that fits in `max_units`.
/// Always advances by at least one character.
fn utf16_boundary(text: &str, max_units: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        units += ch.len_utf16();
        if units > max_units {
            return if idx == 0 { ch.len_utf8() } else { idx };
        }
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(split_message("hello", 10), vec!["hello"]);
        assert_eq!(split_message("", 10), vec![""]);
    }

    #[test]
    fn prefers_newline_boundaries() {
        let chunks = split_message("aaaa\nbbbb\ncc", 7);
        assert_eq!(chunks, vec!["aaaa\n", "bbbb\ncc"]);
    }

    #[test]
    fn hard_splits_without_newline_on_char_boundaries() {
        let text = "ééééé";
        let chunks = split_message(text, 2);
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn counts_astral_characters_as_two_units() {
        let text = "🚨🚨🚨";
        let chunks = split_message(text, 4);
        assert_eq!(chunks, vec!["🚨🚨", "🚨"]);
        assert!(chunks.iter().all(|c| c.encode_utf16().count() <= 4));
    }

    #[test]
    fn emoji_answer_under_char_limit_is_still_split() {
        let text = "🚨".repeat(3000);
        let chunks = split_message(&text, MAX_MESSAGE_UNITS);
        assert_eq!(chunks.len(), 2);
        assert!(chunks
            .iter()
            .all(|c| c.encode_utf16().count() <= MAX_MESSAGE_UNITS));
        assert_eq!(chunks.concat(), text);
    }
}
