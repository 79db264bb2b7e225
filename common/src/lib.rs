//! # Appraisr Common
//!
//! Types shared by every crate of the workspace.
//!
//! * **[`estate`]**: Domain models (rooms, properties, districts, assessments).
//! * **[`request`]**: Inbound request shapes and their conversion into domain models.
//! * **[`districts`]**: Ports for reading and writing the district registry.
//! * **[`error`]**: Error types for validation and the estate use cases.
//! * **[`config`]**: Runtime options handed down from the command line.

pub mod config;
pub mod districts;
pub mod error;
pub mod estate;
pub mod request;
