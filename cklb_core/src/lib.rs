//! # CKLB Core - STIG benchmark to checklist pipeline
//!
//! Parses XML-derived STIG benchmark documents, transforms them into
//! editable CKLB checklists, merges user edits through debounced
//! change batches, and persists the result across normalized SQLite
//! stores. A read-only NIST SP 800-171 framework reader shares the
//! same schema-cast parse boundary.

pub mod benchmark;
pub mod checklist;
pub mod config;
pub mod framework;
pub mod merge;
pub mod schema;
pub mod store;
pub mod transform;

// Convenience re-exports
pub use transform::benchmark_to_checklist;

pub mod prelude {
    pub use crate::benchmark::{parse_benchmark, Benchmark, BenchmarkDocument, Severity};
    pub use crate::checklist::{
        checklist_to_json, parse_checklist, Checklist, ChecklistRule, ChecklistStig, Status,
    };
    pub use crate::framework::{FrameworkDocument, FrameworkService};
    pub use crate::merge::{merge_changes, ChangeSet, Debouncer};
    pub use crate::schema::{cast, uncast, CastError, Registry, Schema};
    pub use crate::store::{Db, StoreError};
    pub use crate::transform::{benchmark_to_checklist, TransformError};
}
