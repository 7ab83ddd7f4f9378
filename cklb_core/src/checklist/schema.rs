//! Schema tables for the CKLB checklist format (version "1.0")
//!
//! CKLB is native JSON, so wire and internal key spellings agree; the
//! tables still buy runtime validation of externally supplied checklist
//! files and the cast/uncast round-trip guarantee.

use crate::schema::{AdditionalPolicy, Prop, Registry, Schema};
use std::sync::OnceLock;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Name of the root schema within [`registry`]
pub const ROOT: &str = "Checklist";

/// Lazily-built schema registry for CKLB documents
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(build_registry)
}

fn build_registry() -> Registry {
    let mut registry = Registry::new();

    registry.register(
        ROOT,
        Schema::object(
            vec![
                Prop::plain("title", Schema::String),
                Prop::plain("id", Schema::String),
                Prop::plain("stigs", Schema::array(Schema::Ref("ChecklistStig"))),
                Prop::plain("active", Schema::Bool),
                Prop::plain("mode", Schema::Number),
                Prop::plain("has_path", Schema::Bool),
                Prop::plain("target_data", Schema::Ref("TargetData")),
                Prop::plain("cklb_version", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "ChecklistStig",
        Schema::object(
            vec![
                Prop::plain("stig_name", Schema::String),
                Prop::plain("display_name", Schema::String),
                Prop::plain("stig_id", Schema::String),
                Prop::plain("release_info", Schema::String),
                Prop::plain("version", Schema::String),
                Prop::plain("uuid", Schema::String),
                Prop::plain("reference_identifier", Schema::String),
                Prop::plain("size", Schema::Number),
                Prop::plain("rules", Schema::array(Schema::Ref("ChecklistRule"))),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "ChecklistRule",
        Schema::object(
            vec![
                Prop::plain("uuid", Schema::String),
                Prop::plain("stig_uuid", Schema::String),
                Prop::plain("group_id", Schema::String),
                Prop::plain("group_id_src", Schema::String),
                Prop::plain("group_title", Schema::String),
                Prop::plain("group_tree", Schema::array(Schema::Ref("GroupTreeNode"))),
                Prop::plain("rule_id", Schema::String),
                Prop::plain("rule_id_src", Schema::String),
                Prop::plain("rule_version", Schema::String),
                Prop::plain("rule_title", Schema::String),
                Prop::plain("severity", Schema::Ref("Severity")),
                Prop::plain("weight", Schema::String),
                Prop::plain("classification", Schema::Ref("Classification")),
                Prop::plain("discussion", Schema::String),
                Prop::plain("check_content", Schema::String),
                Prop::plain("check_content_ref", Schema::Ref("CheckContentRef")),
                Prop::plain("fix_text", Schema::String),
                Prop::plain("ccis", Schema::array(Schema::String)),
                Prop::plain("legacy_ids", Schema::array(Schema::String)),
                Prop::plain("reference_identifier", Schema::String),
                Prop::plain("status", Schema::Ref("Status")),
                Prop::plain("overrides", Schema::Ref("Overrides")),
                Prop::plain("comments", Schema::String),
                Prop::plain("finding_details", Schema::String),
                Prop::plain("false_positives", Schema::String),
                Prop::plain("false_negatives", Schema::String),
                Prop::plain("documentable", Schema::String),
                Prop::plain("security_override_guidance", Schema::String),
                Prop::plain("potential_impacts", Schema::String),
                Prop::plain("third_party_tools", Schema::String),
                Prop::plain("ia_controls", Schema::String),
                Prop::plain("responsibility", Schema::String),
                Prop::plain("mitigations", Schema::String),
                Prop::plain("mitigation_control", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "GroupTreeNode",
        Schema::object(
            vec![
                Prop::plain("id", Schema::String),
                Prop::plain("title", Schema::String),
                Prop::plain("description", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "CheckContentRef",
        Schema::object(
            vec![
                Prop::plain("href", Schema::String),
                Prop::plain("name", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "Overrides",
        Schema::object(
            vec![Prop::plain("severity", Schema::Ref("SeverityOverride")).optional()],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "SeverityOverride",
        Schema::object(
            vec![
                Prop::plain("severity", Schema::Ref("Severity")),
                Prop::plain("reason", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register("Severity", Schema::Enum(&["high", "medium", "low", "info"]));
    registry.register(
        "Status",
        Schema::Enum(&["not_reviewed", "not_a_finding", "not_applicable", "open"]),
    );
    registry.register(
        "Classification",
        Schema::Enum(&["Unclassified", "Classified", "Sensitive"]),
    );

    registry.register(
        "TargetData",
        Schema::object(
            vec![
                Prop::plain("classification", Schema::nullable(Schema::String)),
                Prop::plain("comments", Schema::String),
                Prop::plain("fqdn", Schema::String),
                Prop::plain("host_name", Schema::String),
                Prop::plain("ip_address", Schema::String),
                Prop::plain("is_web_database", Schema::Bool),
                Prop::plain("mac_address", Schema::String),
                Prop::plain("role", Schema::String),
                Prop::plain("target_type", Schema::String),
                Prop::plain("technology_area", Schema::String),
                Prop::plain("web_db_instance", Schema::String),
                Prop::plain("web_db_site", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_every_cklb_type() {
        let registry = registry();
        for name in [
            ROOT,
            "ChecklistStig",
            "ChecklistRule",
            "GroupTreeNode",
            "CheckContentRef",
            "Overrides",
            "SeverityOverride",
            "Severity",
            "Status",
            "Classification",
            "TargetData",
        ] {
            assert!(registry.get(name).is_some(), "missing schema: {name}");
        }
    }
}
