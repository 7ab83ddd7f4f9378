//! Read-only NIST SP 800-171 framework browsing support
//!
//! A second document family behind the same cast contract as the
//! benchmark and checklist. Framework elements arrive as one flat list;
//! their hierarchy (family / requirement / sub-requirement) is encoded
//! positionally in each element identifier and recovered by the slicing
//! accessors on [`types::Element`].

pub mod error;
pub mod schema;
pub mod service;
pub mod types;

pub use error::FrameworkError;
pub use service::{parse_framework, FrameworkService};
pub use types::{
    Element, ElementCollection, ElementType, FrameworkDocument, FrameworkResponse, Relationship,
    RelationshipType, SourceDocument,
};
