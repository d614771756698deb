//! Pipeline-related API endpoints

use std::path::Path;

use reqwest::multipart;
use tracing::debug;

use crate::PipelineServiceClient;
use crate::error::{ClientError, Result};
use kfp_core::domain::pipeline::{Pipeline, PipelineList};

impl PipelineServiceClient {
    // =============================================================================
    // Pipeline Management
    // =============================================================================

    /// List all registered pipelines
    ///
    /// # Returns
    /// The pipelines together with the server-reported total size. The total
    /// size is not verified against the number of returned pipelines.
    pub async fn list_pipelines(&self) -> Result<PipelineList> {
        let url = self.api_url("pipelines");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get a pipeline by ID
    ///
    /// # Arguments
    /// * `pipeline_id` - The pipeline ID
    ///
    /// # Returns
    /// The pipeline details
    pub async fn get_pipeline(&self, pipeline_id: &str) -> Result<Pipeline> {
        let url = self.api_url(&format!("pipelines/{}", pipeline_id));
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Upload a pipeline definition file
    ///
    /// Reads the file at `path` and streams its contents as a multipart form
    /// field named `uploadfile`; the display name is carried as the `name`
    /// query parameter. The file is read in full before any HTTP activity,
    /// so an unreadable path never issues a request.
    ///
    /// # Arguments
    /// * `path` - Path to a local pipeline definition file
    /// * `name` - Display name for the registered pipeline
    ///
    /// # Returns
    /// The newly registered pipeline
    ///
    /// # Example
    /// ```no_run
    /// # use kfp_client::PipelineServiceClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PipelineServiceClient::new("http://localhost:8888")?;
    /// let pipeline = client.upload_pipeline("training.yaml", "training-v2").await?;
    /// println!("Registered pipeline: {}", pipeline.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_pipeline(&self, path: impl AsRef<Path>, name: &str) -> Result<Pipeline> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await.map_err(|source| ClientError::File {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(bytes = contents.len(), "uploading pipeline file");

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "pipeline".to_string());
        let form = multipart::Form::new()
            .part("uploadfile", multipart::Part::bytes(contents).file_name(file_name));

        let url = self.api_url("pipelines/upload");
        let response = self
            .client
            .post(&url)
            .query(&[("name", name)])
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a pipeline
    ///
    /// # Arguments
    /// * `pipeline_id` - The pipeline ID to delete
    pub async fn delete_pipeline(&self, pipeline_id: &str) -> Result<()> {
        let url = self.api_url(&format!("pipelines/{}", pipeline_id));
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
