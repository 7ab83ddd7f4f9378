//! Typed model of the normalized editable checklist (CKLB) document
//!
//! The checklist is the persisted unit of work: created once by the
//! transformer, mutated incrementally through the merge engine, and
//! reassembled on every read from the split stores.

pub mod error;
pub mod parse;
pub mod schema;
pub mod types;

pub use error::ChecklistParseError;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::types::*;
    use crate::benchmark::Severity;
    use crate::config::constants::checklist::{CKLB_VERSION, DEFAULT_MODE};

    pub fn rule(uuid: &str, stig_uuid: &str, group_id: &str) -> ChecklistRule {
        ChecklistRule {
            uuid: uuid.to_string(),
            stig_uuid: stig_uuid.to_string(),
            group_id: group_id.to_string(),
            group_id_src: group_id.to_string(),
            group_title: "Group title".to_string(),
            group_tree: vec![GroupTreeNode {
                id: group_id.to_string(),
                title: "Group title".to_string(),
                description: "d".to_string(),
            }],
            rule_id: "SV-2230r1".to_string(),
            rule_id_src: "SV-2230r1_rule".to_string(),
            rule_version: "WG110".to_string(),
            rule_title: "Rule title".to_string(),
            severity: Severity::Medium,
            weight: "10.0".to_string(),
            classification: Classification::Unclassified,
            discussion: "Do the thing".to_string(),
            check_content: "Check it.".to_string(),
            check_content_ref: CheckContentRef {
                href: String::new(),
                name: "M".to_string(),
            },
            fix_text: "Fix it.".to_string(),
            ccis: vec!["CCI-000366".to_string()],
            legacy_ids: Vec::new(),
            reference_identifier: "1234".to_string(),
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

    pub fn stig(uuid: &str, rules: Vec<ChecklistRule>) -> ChecklistStig {
        ChecklistStig {
            stig_name: "Web Server STIG".to_string(),
            display_name: "Web_Server_STIG".to_string(),
            stig_id: "Web Server STIG".to_string(),
            release_info: "Release: 3".to_string(),
            version: "2".to_string(),
            uuid: uuid.to_string(),
            reference_identifier: "1234".to_string(),
            size: rules.len(),
            rules,
        }
    }

    pub fn checklist(id: &str) -> Checklist {
        let stig_uuid = format!("{id}-stig");
        let rules = vec![
            rule(&format!("{id}-r1"), &stig_uuid, "V-2230"),
            rule(&format!("{id}-r2"), &stig_uuid, "V-2231"),
        ];
        Checklist {
            title: "Web Server STIG".to_string(),
            id: id.to_string(),
            stigs: vec![stig(&stig_uuid, rules)],
            active: false,
            mode: DEFAULT_MODE,
            has_path: true,
            target_data: TargetData::default(),
            cklb_version: CKLB_VERSION.to_string(),
        }
    }
}
pub use parse::{checklist_to_json, parse_checklist};
pub use types::{
    Checklist, ChecklistRule, ChecklistStig, Classification, GroupTreeNode, Overrides,
    SeverityOverride, Status, TargetData,
};
