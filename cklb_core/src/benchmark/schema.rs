//! Schema tables for the benchmark wire format
//!
//! One prop list per wire type; the caster derives both directions from
//! it. Namespace attributes and other XML prolog noise are undeclared
//! and dropped under the `Ignore` policy.

use crate::schema::{AdditionalPolicy, Prop, Registry, Schema};
use std::sync::OnceLock;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Name of the root schema within [`registry`]
pub const ROOT: &str = "BenchmarkDocument";

/// Lazily-built schema registry for benchmark documents
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(build_registry)
}

fn build_registry() -> Registry {
    let mut registry = Registry::new();

    registry.register(
        ROOT,
        Schema::object(
            vec![Prop::renamed("Benchmark", "benchmark", Schema::Ref("Benchmark"))],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "Benchmark",
        Schema::object(
            vec![
                Prop::renamed("+@id", "id", Schema::String),
                Prop::plain("title", Schema::String),
                Prop::plain("description", Schema::String),
                Prop::plain("version", Schema::String),
                Prop::plain("status", Schema::Ref("Status")),
                Prop::renamed("plain-text", "plain_text", Schema::seq(Schema::Ref("PlainText"))),
                Prop::renamed("Profile", "profiles", Schema::array(Schema::Ref("Profile"))),
                Prop::renamed("Group", "groups", Schema::seq(Schema::Ref("Group"))),
                Prop::plain("reference", Schema::Ref("BenchmarkReference")).optional(),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "Status",
        Schema::object(
            vec![
                Prop::renamed("+content", "content", Schema::String),
                Prop::renamed("+@date", "date", Schema::String),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "PlainText",
        Schema::object(
            vec![
                Prop::renamed("+content", "content", Schema::String),
                Prop::renamed("+@id", "id", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "BenchmarkReference",
        Schema::object(
            vec![
                Prop::renamed("+@href", "href", Schema::String).optional(),
                Prop::plain("publisher", Schema::nullable(Schema::String)),
                Prop::plain("source", Schema::String),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "Profile",
        Schema::object(
            vec![
                Prop::renamed("+@id", "id", Schema::String),
                Prop::plain("title", Schema::String),
                Prop::plain("description", Schema::String),
                Prop::renamed("select", "selections", Schema::seq(Schema::Ref("Select"))),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "Select",
        Schema::object(
            vec![
                Prop::renamed("+@idref", "idref", Schema::String),
                Prop::renamed("+@selected", "selected", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "Group",
        Schema::object(
            vec![
                Prop::renamed("+@id", "id", Schema::String),
                Prop::plain("title", Schema::String),
                Prop::plain("description", Schema::String),
                Prop::renamed("Rule", "rule", Schema::Ref("Rule")),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "Rule",
        Schema::object(
            vec![
                Prop::renamed("+@id", "id", Schema::String),
                Prop::renamed("+@weight", "weight", Schema::String),
                Prop::renamed(
                    "+@severity",
                    "severity",
                    Schema::Enum(&["high", "medium", "low", "info"]),
                ),
                Prop::plain("version", Schema::String),
                Prop::plain("title", Schema::String),
                Prop::plain("description", Schema::String),
                Prop::plain("reference", Schema::Ref("RuleReference")),
                Prop::renamed("ident", "idents", Schema::seq(Schema::Ref("Ident"))).optional(),
                Prop::plain("fixtext", Schema::Ref("Fixtext")),
                Prop::plain("fix", Schema::Ref("Fix")),
                Prop::plain("check", Schema::Ref("Check")),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "RuleReference",
        Schema::object(
            vec![
                Prop::plain("title", Schema::String),
                Prop::plain("publisher", Schema::String),
                Prop::plain("type", Schema::String),
                Prop::plain("subject", Schema::String),
                Prop::plain("identifier", Schema::String),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "Ident",
        Schema::object(
            vec![
                Prop::renamed("+content", "content", Schema::String),
                Prop::renamed("+@system", "system", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "Fixtext",
        Schema::object(
            vec![
                Prop::renamed("+content", "content", Schema::String),
                Prop::renamed("+@fixref", "fixref", Schema::String),
            ],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "Fix",
        Schema::object(
            vec![Prop::renamed("+@id", "id", Schema::String)],
            AdditionalPolicy::Deny,
        ),
    );

    registry.register(
        "Check",
        Schema::object(
            vec![
                Prop::renamed("+@system", "system", Schema::String),
                Prop::renamed(
                    "check-content-ref",
                    "content_ref",
                    Schema::Ref("CheckContentRef"),
                ),
                Prop::renamed("check-content", "content", Schema::String),
            ],
            AdditionalPolicy::Ignore,
        ),
    );

    registry.register(
        "CheckContentRef",
        Schema::object(
            vec![
                Prop::renamed("+@href", "href", Schema::String).optional(),
                Prop::renamed("+@name", "name", Schema::String),
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
    fn registry_contains_every_benchmark_type() {
        let registry = registry();
        for name in [
            ROOT,
            "Benchmark",
            "Status",
            "PlainText",
            "BenchmarkReference",
            "Profile",
            "Select",
            "Group",
            "Rule",
            "RuleReference",
            "Ident",
            "Fixtext",
            "Fix",
            "Check",
            "CheckContentRef",
        ] {
            assert!(registry.get(name).is_some(), "missing schema: {name}");
        }
    }
}
