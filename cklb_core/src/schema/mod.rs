//! Declarative runtime schema casting for XML-derived JSON documents
//!
//! Each document family (benchmark, checklist, framework) contributes a
//! table of property schemas; a single recursive interpreter validates
//! parsed JSON against the table and renames keys between the wire
//! convention (`+@id`, `+content`) and the internal convention (`id`,
//! `content`). The same table drives both directions, so adding one
//! field list yields cast and uncast for free.

pub mod caster;
pub mod error;
pub mod registry;
pub mod types;

pub use caster::{cast, uncast};
pub use error::{CastError, CastResult};
pub use registry::Registry;
pub use types::{AdditionalPolicy, ObjectSchema, Prop, Schema};
