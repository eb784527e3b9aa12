// Edge Function client error types
use thiserror::Error;

/// Failure of a single Edge Function call.
#[derive(Error, Debug)]
pub enum EdgeError {
    /// Params did not serialize to a JSON object
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Request never produced a response (DNS, connect, timeout, ...)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Function answered with `{ error }` or a non-2xx status
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl EdgeError {
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        EdgeError::Remote {
            status,
            message: message.into(),
        }
    }

    /// HTTP status when the function answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            EdgeError::Remote { status, .. } => Some(*status),
            EdgeError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(400..=499))
    }

    /// Error code for JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            EdgeError::InvalidParams(_) => "INVALID_PARAMS",
            EdgeError::Config(_) => "CONFIG_ERROR",
            EdgeError::Transport(_) => "TRANSPORT_ERROR",
            EdgeError::Remote { status: 401, .. } => "UNAUTHORIZED",
            EdgeError::Remote { status: 403, .. } => "FORBIDDEN",
            EdgeError::Remote { status: 404, .. } => "NOT_FOUND",
            EdgeError::Remote { .. } => "REMOTE_ERROR",
            EdgeError::Decode(_) => "DECODE_ERROR",
        }
    }
}
