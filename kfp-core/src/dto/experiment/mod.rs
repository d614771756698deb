//! Experiment DTOs

use serde::{Deserialize, Serialize};

/// Request to create a new experiment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExperiment {
    pub name: String,
    pub description: String,
}
