use thiserror::Error;

/// Top-level error type for Dobby.
#[derive(Debug, Error)]
pub enum DobbyError {
    /// Error from the completion provider.
    #[error("provider error: {0}")]
    Provider(String),

    /// Error from the messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
