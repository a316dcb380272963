use std::path::PathBuf;

use shared::error::GENERIC_FAILURE_MESSAGE;
use thiserror::Error;

/// Failure of a single directory-service call.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid directory url: {0}")]
    InvalidUrl(String),
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
    #[error("{0}")]
    Transport(String),
    #[error("Request failed with status code {status}")]
    Status { status: u16, message: Option<String> },
    #[error("malformed response payload: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text shown next to the category that failed: the server's own message
    /// when it sent one, otherwise the transport-level description.
    pub fn display_message(&self) -> String {
        if let FetchError::Status {
            message: Some(message),
            ..
        } = self
        {
            return message.clone();
        }

        let text = self.to_string();
        if text.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            text
        }
    }

    /// Only connection-level failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Timeout { .. } | FetchError::Transport(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
