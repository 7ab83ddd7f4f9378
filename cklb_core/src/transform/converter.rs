//! Core transformation: benchmark + selected profiles -> checklist

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

use super::error::{TransformError, TransformResult};
use crate::benchmark::{Benchmark, Group, Ident, Profile};
use crate::checklist::{
    Checklist, ChecklistRule, ChecklistStig, Classification, GroupTreeNode, Overrides, Status,
    TargetData,
};
use crate::checklist::types::CheckContentRef;
use crate::config::constants::checklist::{CKLB_VERSION, DEFAULT_MODE, RULE_ID_SUFFIX};
use crate::config::constants::ident_systems;

static VULN_DISCUSSION_RE: OnceLock<Regex> = OnceLock::new();

fn vuln_discussion_re() -> &'static Regex {
    VULN_DISCUSSION_RE
        .get_or_init(|| Regex::new(r"<VulnDiscussion>(.*)</VulnDiscussion>").expect("literal pattern"))
}

/// Transform a benchmark into a checklist for the given profile ids
///
/// The produced checklist carries exactly one stig. Rules are the union
/// of every selected profile's selections, deduplicated by group id in
/// first-encounter order. Classification is derived once, from the
/// FIRST selected profile's id; the data model allows per-rule
/// overriding later, but the checklist-as-a-whole owns the derivation.
///
/// Fails with a referential error (and no partial output) if a profile
/// id is unknown or a selection idref resolves to no group.
pub fn benchmark_to_checklist(
    benchmark: &Benchmark,
    profile_ids: &[&str],
) -> TransformResult<Checklist> {
    let profiles = resolve_profiles(benchmark, profile_ids)?;
    let classification = Classification::from_profile_id(&profiles[0].id);

    let groups_by_id: HashMap<&str, &Group> = benchmark
        .groups
        .iter()
        .map(|group| (group.id.as_str(), group))
        .collect();

    let included = selection_union(&profiles, &groups_by_id)?;

    let stig_uuid = Uuid::new_v4().to_string();
    let rules: Vec<ChecklistRule> = included
        .iter()
        .map(|group| build_rule(group, &stig_uuid, classification))
        .collect();

    log::debug!(
        "Transformed benchmark {} into {} rules across {} selected profiles",
        benchmark.id,
        rules.len(),
        profiles.len()
    );

    let stig = ChecklistStig {
        stig_name: benchmark.title.clone(),
        display_name: benchmark.id.clone(),
        stig_id: benchmark.id.replace('_', " "),
        release_info: benchmark.release_info().unwrap_or_default().to_string(),
        version: benchmark.version.clone(),
        uuid: stig_uuid,
        reference_identifier: benchmark
            .groups
            .first()
            .map(|group| group.rule.reference.identifier.clone())
            .unwrap_or_default(),
        size: rules.len(),
        rules,
    };

    Ok(Checklist {
        title: benchmark.title.clone(),
        id: Uuid::new_v4().to_string(),
        stigs: vec![stig],
        active: false,
        mode: DEFAULT_MODE,
        has_path: true,
        target_data: TargetData::default(),
        cklb_version: CKLB_VERSION.to_string(),
    })
}

fn resolve_profiles<'a>(
    benchmark: &'a Benchmark,
    profile_ids: &[&str],
) -> TransformResult<Vec<&'a Profile>> {
    if profile_ids.is_empty() {
        return Err(TransformError::NoProfilesSelected);
    }
    profile_ids
        .iter()
        .map(|id| {
            benchmark
                .profile(id)
                .ok_or_else(|| TransformError::profile_not_found(id, &benchmark.id))
        })
        .collect()
}

/// Union of selection idrefs across profiles, deduplicated by group id,
/// resolved to groups in first-encounter order
fn selection_union<'a>(
    profiles: &[&Profile],
    groups_by_id: &HashMap<&str, &'a Group>,
) -> TransformResult<Vec<&'a Group>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut included = Vec::new();
    for profile in profiles {
        for selection in &profile.selections {
            if !seen.insert(selection.idref.as_str()) {
                continue;
            }
            let group = groups_by_id
                .get(selection.idref.as_str())
                .ok_or_else(|| TransformError::selection_unresolved(&selection.idref, &profile.id))?;
            included.push(*group);
        }
    }
    Ok(included)
}

fn build_rule(group: &Group, stig_uuid: &str, classification: Classification) -> ChecklistRule {
    let rule = &group.rule;
    let (ccis, legacy_ids) = partition_idents(&rule.idents);

    ChecklistRule {
        uuid: Uuid::new_v4().to_string(),
        stig_uuid: stig_uuid.to_string(),
        group_id: group.id.clone(),
        group_id_src: group.id.clone(),
        group_title: rule.title.clone(),
        group_tree: vec![GroupTreeNode {
            id: group.id.clone(),
            title: group.title.clone(),
            description: group.description.clone(),
        }],
        rule_id: strip_rule_suffix(&rule.id),
        rule_id_src: rule.id.clone(),
        rule_version: rule.version.clone(),
        rule_title: rule.title.clone(),
        severity: rule.severity,
        weight: rule.weight.clone(),
        classification,
        discussion: extract_discussion(&rule.description),
        check_content: rule.check.content.clone(),
        check_content_ref: CheckContentRef {
            href: rule.check.content_ref.href.clone().unwrap_or_default(),
            name: rule.check.content_ref.name.clone(),
        },
        fix_text: rule.fixtext.content.clone(),
        ccis,
        legacy_ids,
        reference_identifier: rule.reference.identifier.clone(),
        status: Status::NotReviewed,
        overrides: Overrides::default(),
        comments: String::new(),
        finding_details: String::new(),
        false_positives: String::new(),
        false_negatives: String::new(),
        documentable: "false".to_string(),
        security_override_guidance: String::new(),
        potential_impacts: String::new(),
        third_party_tools: String::new(),
        ia_controls: String::new(),
        responsibility: String::new(),
        mitigations: String::new(),
        mitigation_control: String::new(),
    }
}

/// First `<VulnDiscussion>...</VulnDiscussion>` capture, or empty.
/// Never the raw description: that would leak unrelated markup.
fn extract_discussion(description: &str) -> String {
    vuln_discussion_re()
        .captures(description)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn strip_rule_suffix(rule_id: &str) -> String {
    rule_id
        .strip_suffix(RULE_ID_SUFFIX)
        .unwrap_or(rule_id)
        .to_string()
}

/// Split idents into CCIs and legacy ids by system URI; other systems
/// are dropped
fn partition_idents(idents: &[Ident]) -> (Vec<String>, Vec<String>) {
    let mut ccis = Vec::new();
    let mut legacy_ids = Vec::new();
    for ident in idents {
        match ident.system.as_str() {
            ident_systems::CCI => ccis.push(ident.content.clone()),
            ident_systems::LEGACY => legacy_ids.push(ident.content.clone()),
            _ => {}
        }
    }
    (ccis, legacy_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{
        BenchmarkReference, BenchmarkStatus, Check, CheckContentRef as WireCheckContentRef,
        Fixtext, PlainText, Rule, RuleReference, Selection, Severity,
    };
    use crate::benchmark::types::Fix;
    use assert_matches::assert_matches;

    fn make_rule(n: u32) -> Rule {
        Rule {
            id: format!("SV-{n}r1_rule"),
            weight: "10.0".to_string(),
            severity: Severity::Medium,
            version: format!("WG{n}"),
            title: format!("Rule {n}"),
            description: format!("x <VulnDiscussion>Discussion {n}</VulnDiscussion> y"),
            reference: RuleReference {
                title: "DPMS Target".to_string(),
                publisher: "DISA".to_string(),
                ref_type: "DPMS Target".to_string(),
                subject: "Web Server".to_string(),
                identifier: format!("id-{n}"),
            },
            idents: vec![
                Ident {
                    content: format!("CCI-00{n}"),
                    system: ident_systems::CCI.to_string(),
                },
                Ident {
                    content: format!("V-{n}"),
                    system: ident_systems::LEGACY.to_string(),
                },
                Ident {
                    content: "X".to_string(),
                    system: "other".to_string(),
                },
            ],
            fixtext: Fixtext {
                content: format!("Fix {n}."),
                fixref: format!("F-{n}r1_fix"),
            },
            fix: Fix {
                id: format!("F-{n}r1_fix"),
            },
            check: Check {
                system: format!("C-{n}r1_chk"),
                content_ref: WireCheckContentRef {
                    href: None,
                    name: "M".to_string(),
                },
                content: format!("Check {n}."),
            },
        }
    }

    fn make_group(n: u32) -> Group {
        Group {
            id: format!("V-{n}"),
            title: format!("Group {n}"),
            description: "<GroupDescription></GroupDescription>".to_string(),
            rule: make_rule(n),
        }
    }

    fn make_profile(id: &str, idrefs: &[&str]) -> Profile {
        Profile {
            id: id.to_string(),
            title: id.to_string(),
            description: "p".to_string(),
            selections: idrefs
                .iter()
                .map(|idref| Selection {
                    idref: idref.to_string(),
                    selected: "true".to_string(),
                })
                .collect(),
        }
    }

    fn make_benchmark() -> Benchmark {
        Benchmark {
            id: "Web_Server_STIG".to_string(),
            title: "Web Server STIG".to_string(),
            description: "desc".to_string(),
            version: "2".to_string(),
            status: BenchmarkStatus {
                content: "accepted".to_string(),
                date: "2024-06-01".to_string(),
            },
            plain_text: vec![PlainText {
                id: "release-info".to_string(),
                content: "Release: 3".to_string(),
            }],
            profiles: vec![
                make_profile("MAC-1_Classified", &["V-1", "V-2"]),
                make_profile("MAC-3_Sensitive", &["V-2", "V-3"]),
            ],
            groups: vec![make_group(1), make_group(2), make_group(3)],
            reference: Some(BenchmarkReference {
                href: None,
                publisher: None,
                source: "STIG.DOD.MIL".to_string(),
            }),
        }
    }

    #[test]
    fn selection_union_dedupes_overlapping_profiles_in_encounter_order() {
        let benchmark = make_benchmark();

        let checklist =
            benchmark_to_checklist(&benchmark, &["MAC-1_Classified", "MAC-3_Sensitive"]).unwrap();

        let group_ids: Vec<&str> = checklist.stigs[0]
            .rules
            .iter()
            .map(|rule| rule.group_id.as_str())
            .collect();
        assert_eq!(group_ids, vec!["V-1", "V-2", "V-3"]);
    }

    #[test]
    fn classification_comes_from_the_first_selected_profile_only() {
        let benchmark = make_benchmark();

        let checklist =
            benchmark_to_checklist(&benchmark, &["MAC-3_Sensitive", "MAC-1_Classified"]).unwrap();

        for rule in &checklist.stigs[0].rules {
            assert_eq!(rule.classification, Classification::Sensitive);
        }
    }

    #[test]
    fn discussion_is_extracted_from_the_vuln_discussion_tag() {
        assert_eq!(
            extract_discussion("blah <VulnDiscussion>Do the thing</VulnDiscussion> blah"),
            "Do the thing"
        );
        assert_eq!(extract_discussion("no tag here"), "");
    }

    #[test]
    fn idents_are_partitioned_by_system_uri() {
        let benchmark = make_benchmark();

        let checklist = benchmark_to_checklist(&benchmark, &["MAC-1_Classified"]).unwrap();
        let rule = &checklist.stigs[0].rules[0];

        assert_eq!(rule.ccis, vec!["CCI-001"]);
        assert_eq!(rule.legacy_ids, vec!["V-1"]);
    }

    #[test]
    fn rule_id_has_the_fixed_suffix_stripped() {
        let benchmark = make_benchmark();

        let checklist = benchmark_to_checklist(&benchmark, &["MAC-1_Classified"]).unwrap();
        let rule = &checklist.stigs[0].rules[0];

        assert_eq!(rule.rule_id_src, "SV-1r1_rule");
        assert_eq!(rule.rule_id, "SV-1r1");
    }

    #[test]
    fn rules_carry_the_owning_stigs_uuid_and_default_edit_state() {
        let benchmark = make_benchmark();

        let checklist = benchmark_to_checklist(&benchmark, &["MAC-1_Classified"]).unwrap();
        let stig = &checklist.stigs[0];

        assert_eq!(stig.size, stig.rules.len());
        for rule in &stig.rules {
            assert_eq!(rule.stig_uuid, stig.uuid);
            assert_eq!(rule.status, Status::NotReviewed);
            assert!(rule.overrides.is_empty());
            assert!(rule.comments.is_empty());
            assert!(rule.finding_details.is_empty());
        }

        // Generated identities must be distinct
        let mut uuids: Vec<&str> = stig.rules.iter().map(|r| r.uuid.as_str()).collect();
        uuids.push(stig.uuid.as_str());
        uuids.push(checklist.id.as_str());
        let unique: std::collections::HashSet<&str> = uuids.iter().copied().collect();
        assert_eq!(unique.len(), uuids.len());
    }

    #[test]
    fn stig_metadata_is_derived_from_the_benchmark() {
        let benchmark = make_benchmark();

        let checklist = benchmark_to_checklist(&benchmark, &["MAC-1_Classified"]).unwrap();
        let stig = &checklist.stigs[0];

        assert_eq!(stig.stig_name, "Web Server STIG");
        assert_eq!(stig.display_name, "Web_Server_STIG");
        assert_eq!(stig.stig_id, "Web Server STIG");
        assert_eq!(stig.release_info, "Release: 3");
        assert_eq!(stig.reference_identifier, "id-1");
        assert_eq!(checklist.cklb_version, CKLB_VERSION);
    }

    #[test]
    fn unknown_profile_id_is_a_referential_error() {
        let benchmark = make_benchmark();

        let err = benchmark_to_checklist(&benchmark, &["MAC-9_Missing"]).unwrap_err();

        assert_matches!(err, TransformError::ProfileNotFound { profile_id, .. } => {
            assert_eq!(profile_id, "MAC-9_Missing");
        });
    }

    #[test]
    fn empty_profile_selection_is_rejected() {
        let benchmark = make_benchmark();

        assert_matches!(
            benchmark_to_checklist(&benchmark, &[]).unwrap_err(),
            TransformError::NoProfilesSelected
        );
    }

    #[test]
    fn unresolved_selection_idref_fails_hard() {
        let mut benchmark = make_benchmark();
        benchmark.profiles[0].selections.push(Selection {
            idref: "V-404".to_string(),
            selected: "true".to_string(),
        });

        let err = benchmark_to_checklist(&benchmark, &["MAC-1_Classified"]).unwrap_err();

        assert_matches!(err, TransformError::SelectionUnresolved { idref, profile_id } => {
            assert_eq!(idref, "V-404");
            assert_eq!(profile_id, "MAC-1_Classified");
        });
    }
}
