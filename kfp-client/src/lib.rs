//! KFP HTTP Client
//!
//! A simple, type-safe HTTP client for the Kubeflow Pipelines v1beta1 REST API.
//!
//! This crate provides one method per REST endpoint: list/get/create/delete
//! for pipelines, experiments and runs, plus a multipart upload for pipeline
//! definition files. Each method performs exactly one HTTP round trip and one
//! JSON decode; there are no retries, no pagination traversal and no caching.
//!
//! # Example
//!
//! ```no_run
//! use kfp_client::PipelineServiceClient;
//! use kfp_core::dto::experiment::CreateExperiment;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PipelineServiceClient::new("http://localhost:8888")?;
//!
//!     // Create an experiment
//!     let experiment = client.create_experiment(CreateExperiment {
//!         name: "training".to_string(),
//!         description: "model training runs".to_string(),
//!     }).await?;
//!
//!     println!("Created experiment: {}", experiment.id);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod experiments;
mod pipelines;
mod runs;

// Re-export commonly used types
pub use config::Config;
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Fixed path prefix the service mounts its REST surface under
const API_PREFIX: &str = "apis/v1beta1";

/// HTTP client for the Kubeflow Pipelines v1beta1 API
///
/// The client holds the service base URL and a reusable HTTP connection
/// handle; it is immutable after construction, so one instance can be
/// shared freely across tasks. Methods are organized into logical groups:
/// - Pipeline management (list, get, upload, delete)
/// - Experiment management (list, get, create, delete)
/// - Run management (list, get, create)
#[derive(Debug, Clone)]
pub struct PipelineServiceClient {
    /// Base URL of the pipeline service (e.g., "http://localhost:8888")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl PipelineServiceClient {
    /// Create a new pipeline service client
    ///
    /// The fixed API prefix `/apis/v1beta1/` is appended to the base URL on
    /// every request.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the pipeline service (e.g., "http://localhost:8888")
    ///
    /// # Errors
    /// Returns [`ClientError::Configuration`] if the base URL is empty or
    /// does not use an http(s) scheme.
    ///
    /// # Example
    /// ```
    /// use kfp_client::PipelineServiceClient;
    ///
    /// let client = PipelineServiceClient::new("http://localhost:8888").unwrap();
    /// ```
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the pipeline service
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use kfp_client::PipelineServiceClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PipelineServiceClient::with_client("http://localhost:8888", http_client).unwrap();
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Result<Self> {
        let base_url = base_url.into();

        if base_url.is_empty() {
            return Err(ClientError::Configuration(
                "no base URL supplied".to_string(),
            ));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::Configuration(format!(
                "base URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a new client from an explicit configuration
    ///
    /// # Arguments
    /// * `config` - The client configuration
    ///
    /// # Errors
    /// Returns [`ClientError::Configuration`] if the configured base URL is
    /// unusable.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url.clone())
    }

    /// Get the base URL of the pipeline service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL for a resource path under the API prefix
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_PREFIX, path)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code first and returns an [`ClientError::Api`] for
    /// any non-success response. On success the body is read to completion
    /// as text before decoding, so a decode failure can keep the raw body.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "pipeline service request failed");
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ClientError::Decode { body, source })
    }

    /// Handle an API response that returns no useful body (e.g., DELETE)
    ///
    /// Checks the status code and returns an error if the request failed.
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "pipeline service request failed");
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }

    /// Serialize a JSON request body
    ///
    /// Serialization is done eagerly so a failure surfaces as
    /// [`ClientError::Encode`] rather than a transport error.
    pub(crate) fn encode_body<T: serde::Serialize>(&self, body: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(body).map_err(ClientError::Encode)
    }
}
