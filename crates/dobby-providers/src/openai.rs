//! OpenAI-compatible chat-completions provider.
//!
//! Works with OpenAI's API and any compatible endpoint.

use async_trait::async_trait;
use dobby_core::{error::DobbyError, traits::Provider};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Sampling temperature for draft generation.
pub const TEMPERATURE: f64 = 0.85;

/// Upper bound on a single completion call. The upstream API imposes no
/// limit; an unbounded await would stall the typing indicator forever.
pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI-compatible provider.
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    /// Create from config values.
    pub fn from_config(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub temperature: f64,
    pub messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Option<Vec<ChatChoice>>,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoice {
    pub message: Option<ChatMessage>,
}

/// Build the two-message conversation sent for every draft request.
pub(crate) fn build_messages(system: &str, user: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: "system".to_string(),
            content: system.to_string(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: user.to_string(),
        },
    ]
}

/// Extract the completion text, treating an absent or blank completion as
/// a provider failure.
pub(crate) fn extract_text(resp: &ChatCompletionResponse) -> Result<String, DobbyError> {
    let text = resp
        .choices
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|c| c.message.as_ref())
        .map(|m| m.content.trim().to_string())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(DobbyError::Provider("openai returned an empty completion".into()));
    }
    Ok(text)
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, DobbyError> {
        let start = Instant::now();
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            temperature: TEMPERATURE,
            messages: build_messages(system, user),
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!("openai: POST {url} model={}", self.model);

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(COMPLETION_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| DobbyError::Provider(format!("openai request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(DobbyError::Provider(format!(
                "openai returned {status}: {text}"
            )));
        }

        let parsed: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| DobbyError::Provider(format!("openai: failed to parse response: {e}")))?;

        let text = extract_text(&parsed)?;
        debug!("openai: completion in {}ms", start.elapsed().as_millis());
        Ok(text)
    }

    async fn is_available(&self) -> bool {
        if self.api_key.is_empty() {
            warn!("openai: no API key configured");
            return false;
        }
        // Basic check: try to list models.
        let url = format!("{}/models", self.base_url.trim_end_matches('/'));
        match self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("openai not available: {e}");
                false
            }
        }
    }
}
