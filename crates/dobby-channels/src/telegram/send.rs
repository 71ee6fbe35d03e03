//! Outbound Telegram API calls: sendMessage, sendChatAction, setMyCommands.

use super::TelegramChannel;
use dobby_core::error::DobbyError;
use tracing::{info, warn};

/// Telegram's hard limit on message length.
pub(crate) const MAX_MESSAGE_LEN: usize = 4096;

impl TelegramChannel {
    /// Send a text message to a specific chat, chunking at the API limit.
    pub(crate) async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), DobbyError> {
        for chunk in split_message(text, MAX_MESSAGE_LEN) {
            let url = format!("{}/sendMessage", self.base_url);
            let body = serde_json::json!({
                "chat_id": chat_id,
                "text": chunk,
            });

            let resp = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| DobbyError::Channel(format!("telegram send failed: {e}")))?;

            let status = resp.status();
            if !status.is_success() {
                let error_text = resp.text().await.unwrap_or_default();
                warn!("telegram send got {status}: {error_text}");
            }
        }

        Ok(())
    }

    /// Send a chat action (e.g. "typing") to a chat.
    pub(crate) async fn send_chat_action(
        &self,
        chat_id: i64,
        action: &str,
    ) -> Result<(), DobbyError> {
        let url = format!("{}/sendChatAction", self.base_url);
        let body = serde_json::json!({
            "chat_id": chat_id,
            "action": action,
        });

        self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DobbyError::Channel(format!("telegram sendChatAction failed: {e}")))?;

        Ok(())
    }

    /// Register bot commands with Telegram so users see an autocomplete menu.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        let commands = serde_json::json!({
            "commands": [
                { "command": "dobby", "description": "Draft 3 tweet options about a topic" },
                { "command": "style", "description": "Set the tone for this chat" },
                { "command": "help", "description": "Show available commands" },
                { "command": "ping", "description": "Liveness check" },
            ]
        });

        let url = format!("{}/setMyCommands", self.base_url);
        match self.client.post(&url).json(&commands).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("registered Telegram bot commands");
            }
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                warn!("failed to register Telegram bot commands: {body}");
            }
            Err(e) => {
                warn!("failed to register Telegram bot commands: {e}");
            }
        }
    }
}

/// Split text into chunks of at most `limit` characters, preferring to
/// break at a newline when one falls inside the window.
pub(crate) fn split_message(text: &str, limit: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= limit {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let window_end = (start + limit).min(chars.len());
        let end = if window_end < chars.len() {
            chars[start..window_end]
                .iter()
                .rposition(|&c| c == '\n')
                .map(|pos| start + pos + 1)
                .unwrap_or(window_end)
        } else {
            window_end
        };
        let chunk: String = chars[start..end].iter().collect();
        let trimmed = chunk.trim_end_matches('\n');
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }
        start = end;
    }
    chunks
}
