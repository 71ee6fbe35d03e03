use crate::{
    error::DobbyError,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;

/// Completion provider trait — the writing brain.
///
/// A provider accepts a system+user prompt pair and returns the raw
/// generated text; the caller does all post-processing.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Send a system and user instruction and get the completion text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, DobbyError>;

    /// Check if the provider is reachable and ready.
    async fn is_available(&self) -> bool;
}

/// Messaging channel trait — how commands arrive and replies leave.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, DobbyError>;

    /// Send a reply back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), DobbyError>;

    /// Show a typing indicator while a draft is being generated.
    async fn send_typing(&self, _chat_id: i64) -> Result<(), DobbyError> {
        Ok(())
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), DobbyError>;
}
