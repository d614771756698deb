//! Experiment-related API endpoints

use reqwest::header::CONTENT_TYPE;

use crate::PipelineServiceClient;
use crate::error::Result;
use kfp_core::domain::experiment::{Experiment, ExperimentList};
use kfp_core::dto::experiment::CreateExperiment;

impl PipelineServiceClient {
    // =============================================================================
    // Experiment Management
    // =============================================================================

    /// List all experiments
    ///
    /// # Returns
    /// The experiments together with the server-reported total size
    pub async fn list_experiments(&self) -> Result<ExperimentList> {
        let url = self.api_url("experiments");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get an experiment by ID
    ///
    /// # Arguments
    /// * `experiment_id` - The experiment ID
    ///
    /// # Returns
    /// The experiment details
    pub async fn get_experiment(&self, experiment_id: &str) -> Result<Experiment> {
        let url = self.api_url(&format!("experiments/{}", experiment_id));
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Create a new experiment
    ///
    /// # Arguments
    /// * `req` - The experiment creation request
    ///
    /// # Returns
    /// The created experiment, with the server-assigned `id` and
    /// `created_at` passed through unmodified
    ///
    /// # Example
    /// ```no_run
    /// # use kfp_client::PipelineServiceClient;
    /// # use kfp_core::dto::experiment::CreateExperiment;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PipelineServiceClient::new("http://localhost:8888")?;
    /// let experiment = client.create_experiment(CreateExperiment {
    ///     name: "training".to_string(),
    ///     description: "model training runs".to_string(),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_experiment(&self, req: CreateExperiment) -> Result<Experiment> {
        let url = self.api_url("experiments");
        let body = self.encode_body(&req)?;
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete an experiment
    ///
    /// # Arguments
    /// * `experiment_id` - The experiment ID to delete
    pub async fn delete_experiment(&self, experiment_id: &str) -> Result<()> {
        let url = self.api_url(&format!("experiments/{}", experiment_id));
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
