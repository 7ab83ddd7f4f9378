use serde::{Deserialize, Serialize};

use crate::config::constants::checklist::RELEASE_INFO_ID;

/// Root of a parsed benchmark document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDocument {
    pub benchmark: Benchmark,
}

/// A STIG benchmark: profiles select subsets of groups, each group wraps
/// exactly one checkable rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub id: String,
    pub title: String,
    pub description: String,
    pub version: String,
    pub status: BenchmarkStatus,
    pub plain_text: Vec<PlainText>,
    pub profiles: Vec<Profile>,
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<BenchmarkReference>,
}

impl Benchmark {
    /// Release string from the `release-info` plain-text entry
    pub fn release_info(&self) -> Option<&str> {
        self.plain_text
            .iter()
            .find(|entry| entry.id == RELEASE_INFO_ID)
            .map(|entry| entry.content.as_str())
    }

    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }
}

/// Benchmark publication status (content + date)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkStatus {
    pub content: String,
    pub date: String,
}

/// `plain-text` entry; the `release-info` id carries the release string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainText {
    pub id: String,
    pub content: String,
}

/// Document-level reference block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    pub source: String,
}

/// A named subset-selection of groups
///
/// The profile id encodes `{priority}_{classification}`
/// (e.g. `MAC-1_Classified`), parsed positionally on `_`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub title: String,
    pub description: String,
    pub selections: Vec<Selection>,
}

/// One selection entry of a profile, referencing a group id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub idref: String,
    /// Wire value is the string "true"/"false"
    pub selected: String,
}

impl Selection {
    pub fn is_selected(&self) -> bool {
        self.selected == "true"
    }
}

/// A benchmark group: descriptive metadata around exactly one rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub title: String,
    pub description: String,
    pub rule: Rule,
}

/// The atomic checkable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub weight: String,
    pub severity: Severity,
    pub version: String,
    pub title: String,
    /// Raw description markup; `<VulnDiscussion>` is extracted from it
    /// during transformation
    pub description: String,
    pub reference: RuleReference,
    #[serde(default)]
    pub idents: Vec<Ident>,
    pub fixtext: Fixtext,
    pub fix: Fix,
    pub check: Check,
}

/// Rule severity as carried by the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }
}

/// Rule-level reference block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleReference {
    pub title: String,
    pub publisher: String,
    #[serde(rename = "type")]
    pub ref_type: String,
    pub subject: String,
    pub identifier: String,
}

/// Cross-reference identifier tagged by system URI
/// (`http://cyber.mil/cci` or `http://cyber.mil/legacy`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ident {
    pub content: String,
    pub system: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixtext {
    pub content: String,
    pub fixref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub system: String,
    pub content_ref: CheckContentRef,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckContentRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub name: String,
}
