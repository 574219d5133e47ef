use std::path::PathBuf;
use thiserror::Error;

/// Error type for the node-locator CLI
#[derive(Error, Debug)]
pub enum InteractiveError {
    #[error("Client binary not found (expected fallback location: {})", .0.display())]
    ClientNotFound(PathBuf),

    #[error("Client error: {0}")]
    Client(#[from] crate::core::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InteractiveError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Convert a client error, attaching the fallback location to `NotFound`
    pub fn from_client(err: crate::core::Error, fallback: PathBuf) -> Self {
        match err {
            crate::core::Error::NotFound => Self::ClientNotFound(fallback),
            other => Self::Client(other),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::ClientNotFound(fallback) => {
                format!(
                    "Client binary '{}' not found. Install it on your PATH or copy it to {}.",
                    crate::core::CLIENT_BINARY,
                    fallback.display()
                )
            }
            Self::Client(crate::core::Error::Timeout(limit)) => {
                format!(
                    "Client did not exit within {:?}. Try using --timeout flag with a larger value.",
                    limit
                )
            }
            Self::Client(crate::core::Error::Spawn { command, source }) => {
                format!(
                    "Could not start '{}': {}. Check that the file is executable.",
                    command, source
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Convenient result type for the CLI
pub type Result<T> = std::result::Result<T, InteractiveError>;
