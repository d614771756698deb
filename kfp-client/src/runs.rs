//! Run-related API endpoints

use reqwest::header::CONTENT_TYPE;

use crate::PipelineServiceClient;
use crate::error::Result;
use kfp_core::domain::run::{Run, RunDetail, RunList};

impl PipelineServiceClient {
    // =============================================================================
    // Run Management
    // =============================================================================

    /// List all runs
    ///
    /// # Returns
    /// The runs together with the server-reported total size
    pub async fn list_runs(&self) -> Result<RunList> {
        let url = self.api_url("runs");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get a run by ID
    ///
    /// # Arguments
    /// * `run_id` - The run ID
    ///
    /// # Returns
    /// The run together with its server-side runtime manifest
    pub async fn get_run(&self, run_id: &str) -> Result<RunDetail> {
        let url = self.api_url(&format!("runs/{}", run_id));
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Create a new run of a pipeline
    ///
    /// The caller fills the writable fields of [`Run`] (`name`,
    /// `description`, `pipeline_spec`, `resource_references`); everything
    /// else is populated by the service.
    ///
    /// # Arguments
    /// * `run` - The run to create
    ///
    /// # Returns
    /// The created run together with its runtime manifest
    ///
    /// # Example
    /// ```no_run
    /// # use kfp_client::PipelineServiceClient;
    /// # use kfp_core::domain::pipeline::Parameter;
    /// # use kfp_core::domain::run::{PipelineSpec, Run};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PipelineServiceClient::new("http://localhost:8888")?;
    /// let detail = client.create_run(Run {
    ///     name: "demo".to_string(),
    ///     pipeline_spec: PipelineSpec {
    ///         pipeline_id: "p1".to_string(),
    ///         parameters: vec![Parameter {
    ///             name: "steps".to_string(),
    ///             value: Some("10".to_string()),
    ///         }],
    ///         ..Default::default()
    ///     },
    ///     ..Default::default()
    /// }).await?;
    /// println!("Run status: {}", detail.run.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_run(&self, run: Run) -> Result<RunDetail> {
        let url = self.api_url("runs");
        let body = self.encode_body(&run)?;
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
