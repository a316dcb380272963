use serde::{Deserialize, Serialize};

/// Shown when a failure carries no usable text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

/// Error body the directory service may send with a non-2xx response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Non-blank `message` from a raw response body, if the body is JSON
    /// and carries one.
    pub fn message_from_bytes(body: &[u8]) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
        parsed
            .message
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
    }
}
