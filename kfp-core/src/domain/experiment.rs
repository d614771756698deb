//! Experiment domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named grouping under which runs are organized
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experiment {
    /// Server-assigned identifier, empty until the service creates the experiment
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Experiments as returned by the list endpoint
///
/// `total_size` is reported by the service and is not reconciled against
/// `experiments.len()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimentList {
    #[serde(default)]
    pub experiments: Vec<Experiment>,
    #[serde(default)]
    pub total_size: i32,
}
