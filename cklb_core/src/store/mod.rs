//! Local persistence: four normalized record stores plus the
//! denormalize/renormalize aggregate pair
//!
//! A checklist is split across the `checklists`, `stigs`, and `rules`
//! stores with a `checklist_stigs` link table between them, and is
//! reassembled on every read. Callers never reach into individual
//! stores and assume consistency across them; `export_checklist` is the
//! single aggregate builder, and it re-derives each stig's `size`.

pub mod aggregate;
pub mod db;
pub mod error;
pub mod records;
pub mod stores;

pub use db::Db;
pub use error::{StoreError, StoreResult};
pub use records::{ChecklistRecord, ChecklistStigLink, StigRecord};
