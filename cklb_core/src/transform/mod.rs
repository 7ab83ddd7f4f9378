//! Benchmark -> Checklist transformation
//!
//! Projects a parsed benchmark plus a selected set of profiles into a
//! fresh CKLB checklist: selection union, classification derivation,
//! discussion extraction, ident partitioning, and identity assignment.

pub mod converter;
pub mod error;

pub use converter::benchmark_to_checklist;
pub use error::{TransformError, TransformResult};
