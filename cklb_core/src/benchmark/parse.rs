//! Parse boundary: benchmark text -> validated internal model

use super::error::BenchmarkParseError;
use super::schema::{self, ROOT};
use super::types::BenchmarkDocument;
use crate::schema::{cast, uncast, Schema};

/// Parse and validate a benchmark JSON document
///
/// The text is parsed, cast against the benchmark schema tables (which
/// renames wire keys and normalizes singleton collections), and then
/// deserialized into the typed model.
pub fn parse_benchmark(text: &str) -> Result<BenchmarkDocument, BenchmarkParseError> {
    let wire: serde_json::Value = serde_json::from_str(text)?;
    let internal = cast(&wire, &Schema::Ref(ROOT), schema::registry())?;
    let document = serde_json::from_value(internal)?;
    Ok(document)
}

/// Serialize a benchmark model back to its wire-format JSON
pub fn benchmark_to_wire_json(document: &BenchmarkDocument) -> Result<String, BenchmarkParseError> {
    let internal = serde_json::to_value(document)?;
    let wire = uncast(&internal, &Schema::Ref(ROOT), schema::registry())?;
    Ok(serde_json::to_string_pretty(&wire)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::types::Severity;
    use assert_matches::assert_matches;
    use crate::schema::CastError;

    /// Minimal wire-format benchmark: one profile with a singleton
    /// `select`, a singleton `Group`, a singleton `plain-text`, and a
    /// singleton `ident` -- every ambiguous field in bare-object form.
    fn wire_benchmark() -> String {
        serde_json::json!({
            "+p_xml": "version=\"1.0\" encoding=\"utf-8\"",
            "Benchmark": {
                "+@xmlns": "http://checklists.nist.gov/xccdf/1.1",
                "+@id": "Web_Server_STIG",
                "title": "Web Server STIG",
                "description": "desc",
                "version": "2",
                "status": { "+content": "accepted", "+@date": "2024-06-01" },
                "plain-text": { "+content": "Release: 3", "+@id": "release-info" },
                "notice": { "+@id": "terms", "+@xml:lang": "en" },
                "reference": {
                    "publisher": null,
                    "source": "STIG.DOD.MIL"
                },
                "Profile": [{
                    "+@id": "MAC-1_Classified",
                    "title": "I - Mission Critical Classified",
                    "description": "p",
                    "select": { "+@idref": "V-2230", "+@selected": "true" }
                }],
                "Group": {
                    "+@id": "V-2230",
                    "title": "Group title",
                    "description": "<GroupDescription></GroupDescription>",
                    "Rule": {
                        "+@id": "SV-2230r1_rule",
                        "+@weight": "10.0",
                        "+@severity": "medium",
                        "version": "WG110",
                        "title": "Rule title",
                        "description": "x <VulnDiscussion>Do the thing</VulnDiscussion> y",
                        "reference": {
                            "title": "DPMS Target",
                            "publisher": "DISA",
                            "type": "DPMS Target",
                            "subject": "Web Server",
                            "identifier": "1234"
                        },
                        "ident": { "+content": "CCI-000366", "+@system": "http://cyber.mil/cci" },
                        "fixtext": { "+content": "Fix it.", "+@fixref": "F-2230r1_fix" },
                        "fix": { "+@id": "F-2230r1_fix" },
                        "check": {
                            "+@system": "C-2230r1_chk",
                            "check-content-ref": { "+@name": "M" },
                            "check-content": "Check it."
                        }
                    }
                }
            }
        })
        .to_string()
    }

    #[test]
    fn parses_a_wire_benchmark_with_singleton_collections() {
        let document = parse_benchmark(&wire_benchmark()).unwrap();
        let benchmark = &document.benchmark;

        assert_eq!(benchmark.id, "Web_Server_STIG");
        assert_eq!(benchmark.release_info(), Some("Release: 3"));
        assert_eq!(benchmark.profiles.len(), 1);
        assert_eq!(benchmark.profiles[0].selections.len(), 1);
        assert_eq!(benchmark.profiles[0].selections[0].idref, "V-2230");
        assert!(benchmark.profiles[0].selections[0].is_selected());
        assert_eq!(benchmark.groups.len(), 1);

        let rule = &benchmark.groups[0].rule;
        assert_eq!(rule.id, "SV-2230r1_rule");
        assert_eq!(rule.severity, Severity::Medium);
        assert_eq!(rule.idents.len(), 1);
        assert_eq!(rule.idents[0].content, "CCI-000366");
        assert_eq!(rule.check.content_ref.name, "M");
        assert_eq!(rule.reference.identifier, "1234");
    }

    #[test]
    fn wire_round_trip_preserves_the_model() {
        let document = parse_benchmark(&wire_benchmark()).unwrap();
        let wire = benchmark_to_wire_json(&document).unwrap();
        let reparsed = parse_benchmark(&wire).unwrap();

        assert_eq!(document, reparsed);
    }

    #[test]
    fn rejects_an_unknown_severity_literal() {
        let text = wire_benchmark().replace("\"medium\"", "\"critical\"");
        let err = parse_benchmark(&text).unwrap_err();

        assert_matches!(
            err,
            BenchmarkParseError::Cast(CastError::InvalidEnumValue { .. })
        );
    }

    #[test]
    fn rejects_a_benchmark_missing_its_title() {
        let parsed: serde_json::Value = serde_json::from_str(&wire_benchmark()).unwrap();
        let mut doc = parsed;
        doc["Benchmark"]
            .as_object_mut()
            .unwrap()
            .remove("title");

        let err = parse_benchmark(&doc.to_string()).unwrap_err();

        assert_matches!(
            err,
            BenchmarkParseError::Cast(CastError::MissingProperty { property, .. }) => {
                assert_eq!(property, "title");
            }
        );
    }
}
