//! Schema tables for the framework export format
//!
//! The export is plain JSON (no attribute/content markers), so every
//! prop keeps its wire spelling; the tables still gate the document
//! through the same cast contract as the other families.

use crate::schema::{AdditionalPolicy, Prop, Registry, Schema};
use std::sync::OnceLock;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Name of the root schema within [`registry`]
pub const ROOT: &str = "FrameworkDocument";

const ELEMENT_TYPES: &[&str] = &[
    "determination",
    "discussion",
    "examine",
    "family",
    "interview",
    "odp",
    "odp_statement",
    "odp_type",
    "reference",
    "requirement",
    "security_requirement",
    "test",
    "withdraw_reason",
];

/// Lazily-built schema registry for framework documents
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(build_registry)
}

fn build_registry() -> Registry {
    let mut registry = Registry::new();

    registry.register(
        ROOT,
        Schema::object(
            vec![Prop::plain("response", Schema::Ref("Response"))],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "Response",
        Schema::object(
            vec![
                Prop::renamed("requestType", "request_type", Schema::Number),
                Prop::plain("elements", Schema::Ref("ElementCollection")),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "ElementCollection",
        Schema::object(
            vec![
                Prop::plain("documents", Schema::array(Schema::Ref("SourceDocument"))),
                Prop::plain(
                    "relationship_types",
                    Schema::array(Schema::Ref("RelationshipType")),
                ),
                Prop::plain("elements", Schema::array(Schema::Ref("Element"))),
                Prop::plain("relationships", Schema::array(Schema::Ref("Relationship"))),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "SourceDocument",
        Schema::object(
            vec![
                Prop::plain("doc_identifier", Schema::String),
                Prop::plain("name", Schema::String),
                Prop::plain("version", Schema::String),
                Prop::plain("website", Schema::String),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "Element",
        Schema::object(
            vec![
                Prop::plain("element_type", Schema::Enum(ELEMENT_TYPES)),
                Prop::plain("element_identifier", Schema::String),
                Prop::plain("title", Schema::String),
                Prop::plain("text", Schema::String),
                Prop::plain("doc_identifier", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "RelationshipType",
        Schema::object(
            vec![
                Prop::plain("relationship_identifier", Schema::String),
                Prop::plain("description", Schema::String),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "Relationship",
        Schema::object(
            vec![
                Prop::plain("source_element_identifier", Schema::String),
                Prop::plain("source_doc_identifier", Schema::String),
                Prop::plain("dest_element_identifier", Schema::String),
                Prop::plain("dest_doc_identifier", Schema::String),
                Prop::plain("relationship_identifier", Schema::String),
                Prop::plain("provenance_doc_identifier", Schema::String),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry
}
