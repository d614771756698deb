//! Domain entities mirroring the pipeline service's JSON schema
//!
//! All types here are transient value objects: they are decoded from a
//! single response (or built for a single request) and discarded after use.

pub mod experiment;
pub mod pipeline;
pub mod run;
