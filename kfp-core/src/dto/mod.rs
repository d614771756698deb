//! Request bodies sent to the pipeline service
//!
//! Create-run posts a [`crate::domain::run::Run`] directly, so only the
//! experiment endpoint needs a dedicated request type.

pub mod experiment;
