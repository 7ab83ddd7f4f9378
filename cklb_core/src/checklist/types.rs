use serde::{Deserialize, Serialize};

use crate::benchmark::Severity;

/// The persisted unit of work, produced from a benchmark plus selected
/// profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub title: String,
    pub id: String,
    pub stigs: Vec<ChecklistStig>,
    pub active: bool,
    pub mode: i64,
    pub has_path: bool,
    pub target_data: TargetData,
    pub cklb_version: String,
}

/// One STIG within a checklist
///
/// `size` must equal `rules.len()` after any merge or reassembly; the
/// persistence layer re-derives it and never trusts a stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistStig {
    pub stig_name: String,
    pub display_name: String,
    pub stig_id: String,
    pub release_info: String,
    pub version: String,
    pub uuid: String,
    pub reference_identifier: String,
    pub size: usize,
    pub rules: Vec<ChecklistRule>,
}

/// One editable rule record
///
/// `uuid` is the globally-unique persistence key; `rule_id`/`group_id`
/// are not unique across STIGs and must not be used as storage keys.
/// `severity` is the source value and immutable; a user replacement
/// lives in `overrides`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistRule {
    pub uuid: String,
    /// Owning stig's uuid
    pub stig_uuid: String,
    pub group_id: String,
    pub group_id_src: String,
    pub group_title: String,
    pub group_tree: Vec<GroupTreeNode>,
    pub rule_id: String,
    pub rule_id_src: String,
    pub rule_version: String,
    pub rule_title: String,
    pub severity: Severity,
    pub weight: String,
    pub classification: Classification,
    pub discussion: String,
    pub check_content: String,
    pub check_content_ref: CheckContentRef,
    pub fix_text: String,
    pub ccis: Vec<String>,
    pub legacy_ids: Vec<String>,
    pub reference_identifier: String,
    pub status: Status,
    pub overrides: Overrides,
    pub comments: String,
    pub finding_details: String,
    pub false_positives: String,
    pub false_negatives: String,
    pub documentable: String,
    pub security_override_guidance: String,
    pub potential_impacts: String,
    pub third_party_tools: String,
    pub ia_controls: String,
    pub responsibility: String,
    pub mitigations: String,
    pub mitigation_control: String,
}

/// Group breadcrumb carried on each rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTreeNode {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckContentRef {
    pub href: String,
    pub name: String,
}

/// User-supplied replacement values for source-provided fields
///
/// Deep-equality (derived `PartialEq`) is what the merge engine uses to
/// decide whether an override edit is a genuine change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Overrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityOverride>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.severity.is_none()
    }
}

/// Severity replacement with mandatory justification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityOverride {
    pub severity: Severity,
    pub reason: String,
}

/// Review status of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NotReviewed,
    NotAFinding,
    NotApplicable,
    Open,
}

impl Status {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "not_reviewed" => Some(Self::NotReviewed),
            "not_a_finding" => Some(Self::NotAFinding),
            "not_applicable" => Some(Self::NotApplicable),
            "open" => Some(Self::Open),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotReviewed => "not_reviewed",
            Self::NotAFinding => "not_a_finding",
            Self::NotApplicable => "not_applicable",
            Self::Open => "open",
        }
    }
}

/// Checklist-level classification, derived from the owning profile id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Unclassified,
    Classified,
    Sensitive,
}

impl Classification {
    /// Derive from a profile id of the form `{priority}_{classification}`
    /// (e.g. `MAC-1_Classified`). An unrecognized or absent second
    /// segment defaults to `Unclassified`.
    pub fn from_profile_id(profile_id: &str) -> Self {
        match profile_id.split('_').nth(1) {
            Some("Classified") => Self::Classified,
            Some("Sensitive") => Self::Sensitive,
            _ => Self::Unclassified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unclassified => "Unclassified",
            Self::Classified => "Classified",
            Self::Sensitive => "Sensitive",
        }
    }
}

/// Host/environment metadata for the checklist target
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetData {
    #[serde(default)]
    pub classification: Option<String>,
    pub comments: String,
    pub fqdn: String,
    pub host_name: String,
    pub ip_address: String,
    pub is_web_database: bool,
    pub mac_address: String,
    pub role: String,
    pub target_type: String,
    pub technology_area: String,
    pub web_db_instance: String,
    pub web_db_site: String,
}
