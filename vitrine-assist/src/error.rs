// Vitrine Assistant Bridge - Error Types
// STORY-005: Generation backend framework
//
// Error types for the external text-generation bridge. Designed for error
// isolation: a failing backend never crashes the app; failures surface as
// transcript entries instead.

use std::fmt;
use std::io;

/// Errors that can occur while talking to the generation API
#[derive(Debug, Clone)]
pub enum AssistError {
    /// API key environment variable missing or empty
    MissingApiKey(String),

    /// HTTP transport failed
    Http(String),

    /// I/O error while reading the response body
    IoError(String),

    /// API answered with a non-success status
    BadStatus { code: u16, body: String },

    /// JSON encoding/decoding error on the wire
    ParseError(String),

    /// The API answered, but with no usable candidate text
    EmptyReply,

    /// Timeout waiting for the API
    Timeout { duration_secs: u64 },
}

impl fmt::Display for AssistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey(var) => {
                write!(f, "API key not found: is '{}' set in the environment?", var)
            }
            Self::Http(msg) => write!(f, "HTTP request failed: {}", msg),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
            Self::BadStatus { code, body } => {
                write!(f, "API returned status {}: {}", code, body)
            }
            Self::ParseError(msg) => write!(f, "Failed to parse API payload: {}", msg),
            Self::EmptyReply => write!(f, "API reply contained no text"),
            Self::Timeout { duration_secs } => {
                write!(f, "Timeout after {}s waiting for the API", duration_secs)
            }
        }
    }
}

impl std::error::Error for AssistError {}

impl From<io::Error> for AssistError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut => Self::Timeout { duration_secs: 0 },
            _ => Self::IoError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AssistError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<isahc::Error> for AssistError {
    fn from(err: isahc::Error) -> Self {
        if err == isahc::error::ErrorKind::Timeout {
            Self::Timeout { duration_secs: 0 }
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<isahc::http::Error> for AssistError {
    fn from(err: isahc::http::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type for bridge operations
pub type AssistResult<T> = Result<T, AssistError>;
