//! Error types for the pipeline service client

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the pipeline service client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client was constructed without a usable base URL
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body from the API
        message: String,
    },

    /// Failed to serialize a request body
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body is not valid JSON for the expected shape
    #[error("Failed to decode response body: {source}")]
    Decode {
        /// Raw response body, kept for diagnostics
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Local file for upload cannot be opened or read
    #[error("Failed to read pipeline file {}: {source}", path.display())]
    File {
        /// Path that could not be read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Create an API error from status code and response body
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}
