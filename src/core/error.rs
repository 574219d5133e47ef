use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Errors produced while locating or launching the client binary
#[derive(Error, Debug)]
pub enum Error {
    /// The search path, every well-known location and the application data
    /// fallback were all probed without success
    #[error("Client binary not found on machine")]
    NotFound,

    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Client process failed: {0}")]
    ProcessFailed(ExitStatus),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether discovery exhausted every tier
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(Error::NotFound.to_string(), "Client binary not found on machine");
        assert_eq!(
            Error::Timeout(Duration::from_secs(30)).to_string(),
            "Timeout after 30s"
        );
        assert_eq!(
            Error::Timeout(Duration::from_millis(250)).to_string(),
            "Timeout after 250ms"
        );

        let spawn = Error::Spawn {
            command: "parity".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            spawn.to_string(),
            "Failed to spawn `parity`: No such file or directory"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::NotFound.is_not_found());
        assert!(!Error::Timeout(Duration::from_secs(1)).is_not_found());
    }
}
