//! Configuration module
//!
//! Explicit client configuration. Loading the base URL from the
//! environment or a config file is the caller's concern; the client only
//! accepts this struct.

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the pipeline service (e.g., "http://localhost:8888")
    pub base_url: String,
}

impl Config {
    /// Create a configuration from a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
