use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured failure payload returned by the backend.
///
/// Passed through to callers exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: i32,
    pub message: String,
    pub timestamp: String,
}

impl ErrorEnvelope {
    /// Parse the timestamp as RFC 3339, if the server used that format.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error ({status}): {}", .envelope.message)]
    Server {
        status: StatusCode,
        envelope: ErrorEnvelope,
    },

    #[error("API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    #[error("Failed to read upload file: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// The server's envelope, when it sent one.
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            ApiError::Server { envelope, .. } => Some(envelope),
            _ => None,
        }
    }

    /// HTTP status of the failed response; `None` when no response arrived.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } | ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Message suitable for showing to a user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { envelope, .. } => envelope.message.clone(),
            ApiError::Network(_) => "Network error: the server could not be reached".to_string(),
            other => other.to_string(),
        }
    }
}
