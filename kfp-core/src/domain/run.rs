//! Run domain types
//!
//! A run is one execution of a pipeline. The writable fields (`name`,
//! `description`, `pipeline_spec`, `resource_references`) are set by the
//! caller when creating a run; everything else is populated by the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::pipeline::Parameter;

/// Storage state of a run record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageState {
    #[serde(rename = "STORAGESTATE_AVAILABLE")]
    Available,
    #[serde(rename = "STORAGESTATE_ARCHIVED")]
    Archived,
}

/// Kind of resource a reference points at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    #[default]
    #[serde(rename = "UNKNOWN_RESOURCE_TYPE")]
    Unknown,
    Experiment,
    Job,
}

/// How a run relates to the referenced resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relationship {
    #[default]
    #[serde(rename = "UNKNOWN_RELATIONSHIP")]
    Unknown,
    Owner,
    Creator,
}

/// Key identifying a referenced parent resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceKey {
    #[serde(rename = "type", default)]
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// Typed pointer from a run to an owning or creating resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceReference {
    #[serde(default)]
    pub key: ResourceKey,
    #[serde(default)]
    pub relationship: Relationship,
}

/// Identifies which pipeline a run executes and with what parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pipeline_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub workflow_manifest: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pipeline_manifest: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

/// One pipeline execution request/record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_state: Option<StorageState>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub pipeline_spec: PipelineSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_references: Vec<ResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    /// Service-owned status string (e.g. "Running", "Succeeded")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub metrics: String,
}

/// Runs as returned by the list endpoint
///
/// `total_size` is reported by the service and is not reconciled against
/// `runs.len()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunList {
    #[serde(default)]
    pub runs: Vec<Run>,
    #[serde(default)]
    pub total_size: i32,
}

/// Workflow manifest produced by the service for a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineRuntime {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub workflow_manifest: String,
}

/// A run plus its server-side runtime information
///
/// Returned by the create-run and get-run endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunDetail {
    #[serde(default)]
    pub run: Run,
    #[serde(default)]
    pub pipeline_runtime: PipelineRuntime,
}
