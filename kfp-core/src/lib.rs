//! KFP Core
//!
//! Core types for the Kubeflow Pipelines v1beta1 REST surface.
//!
//! This crate contains:
//! - Domain types: Entities returned by the API (Pipeline, Experiment, Run, etc.)
//! - DTOs: Request bodies sent to the API

pub mod domain;
pub mod dto;
