//! # Appraisr Core
//!
//! The estate use cases and the adapters they run against.
//!
//! * **[`assessment`]**: Surface and price calculation for a property.
//! * **[`registrar`]**: Insert-or-fail registration of districts.
//! * **[`registry`]**: In-memory district registry.
//! * **[`estate`]**: Service that maps requests and drives the two use cases.

pub mod assessment;
pub mod estate;
pub mod registrar;
pub mod registry;
