//! Status/override merge engine
//!
//! Reconciles persisted rule records with in-session edits expressed as
//! flat change paths (`rule.<uuid>.<field>`), deciding what is a
//! genuine change and what is a no-op. Writes are whole-rule records;
//! the debouncer batches rapid-fire edits before they are committed.

pub mod debounce;
pub mod engine;
pub mod error;
pub mod paths;

pub use debounce::Debouncer;
pub use engine::{merge_changes, ChangeSet};
pub use error::{MergeError, PathError};
pub use paths::{parse_change_path, ChangePath, RuleField};
