//! Cross-crate tests for the estate use cases.

mod assessment;
mod registry;
mod util;
