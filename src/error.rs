//! Error classification shared by every tool.
//!
//! Processing functions fail with a [`ToolError`] internally; at the tool
//! boundary the error is folded into an [`Outcome`](crate::tools::Outcome)
//! value so nothing crosses into the form layer as a panic or `Err`.

use thiserror::Error;

/// Coarse error classification rendered by the form layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty or whitespace-only input, caught before processing.
    ValidationError,
    /// Malformed JSON.
    ParseError,
    /// Malformed Base64 or invalid UTF-8 after decoding.
    DecodeError,
    /// Missing credential.
    ConfigError,
    /// Network or endpoint failure.
    TransportError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationError => "validation_error",
            ErrorKind::ParseError => "parse_error",
            ErrorKind::DecodeError => "decode_error",
            ErrorKind::ConfigError => "config_error",
            ErrorKind::TransportError => "transport_error",
        }
    }
}

/// Errors produced by the tool processing functions.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded bytes are not valid UTF-8 text: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("credential not found")]
    MissingCredential,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Endpoint returned {status}: {message}")]
    Endpoint { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ToolError {
    /// Classify the error for display.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::Validation(_) => ErrorKind::ValidationError,
            ToolError::Json(_) => ErrorKind::ParseError,
            ToolError::Base64(_) | ToolError::Utf8(_) => ErrorKind::DecodeError,
            ToolError::MissingCredential => ErrorKind::ConfigError,
            ToolError::Request(_)
            | ToolError::Endpoint { .. }
            | ToolError::MalformedResponse(_) => ErrorKind::TransportError,
        }
    }
}
