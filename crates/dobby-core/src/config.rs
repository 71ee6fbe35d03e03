//! Environment-sourced configuration, read once at startup.
//!
//! Required credentials fail hard before any network activity; everything
//! else has a default. A `.env` file is honored when the binary loads it
//! via `dotenvy` before calling [`Config::from_env`].

use crate::error::DobbyError;
use crate::tone::Tone;
use tracing::warn;

/// Telegram bot token variable.
pub const ENV_TG_TOKEN: &str = "TG_TOKEN";
/// Completion-service API key variable.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Optional model override variable.
pub const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";
/// Optional API base URL override variable.
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
/// Optional default tone variable.
pub const ENV_DEFAULT_TONE: &str = "DEFAULT_TONE";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub default_tone: Tone,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, DobbyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup (injectable in tests).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, DobbyError> {
        let telegram_token = required(&get, ENV_TG_TOKEN)?;
        let openai_api_key = required(&get, ENV_OPENAI_API_KEY)?;

        let model = get(ENV_OPENAI_MODEL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let openai_base_url = get(ENV_OPENAI_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let default_tone = match get(ENV_DEFAULT_TONE) {
            Some(raw) if !raw.trim().is_empty() => Tone::parse(&raw).unwrap_or_else(|| {
                warn!("invalid {ENV_DEFAULT_TONE} value '{raw}', using explanatory");
                Tone::Explanatory
            }),
            _ => Tone::Explanatory,
        };

        Ok(Self {
            telegram_token,
            openai_api_key,
            openai_base_url,
            model,
            default_tone,
        })
    }
}

fn required(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, DobbyError> {
    get(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DobbyError::Config(format!("missing {key} — set it in the environment or .env")))
}
