//! Split record types bridging the nested checklist model and the
//! flat per-store rows

use serde::{Deserialize, Serialize};

use crate::checklist::{Checklist, ChecklistRule, ChecklistStig, TargetData};

/// A checklist row, without its stig payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistRecord {
    pub id: String,
    pub title: String,
    pub active: bool,
    pub mode: i64,
    pub has_path: bool,
    pub target_data: TargetData,
    pub cklb_version: String,
}

impl ChecklistRecord {
    /// Reassemble a full checklist from this record and its stigs
    pub fn into_checklist(self, stigs: Vec<ChecklistStig>) -> Checklist {
        Checklist {
            title: self.title,
            id: self.id,
            stigs,
            active: self.active,
            mode: self.mode,
            has_path: self.has_path,
            target_data: self.target_data,
            cklb_version: self.cklb_version,
        }
    }
}

impl From<&Checklist> for ChecklistRecord {
    fn from(checklist: &Checklist) -> Self {
        Self {
            id: checklist.id.clone(),
            title: checklist.title.clone(),
            active: checklist.active,
            mode: checklist.mode,
            has_path: checklist.has_path,
            target_data: checklist.target_data.clone(),
            cklb_version: checklist.cklb_version.clone(),
        }
    }
}

/// A stig row, without its rule payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StigRecord {
    pub stig_name: String,
    pub display_name: String,
    pub stig_id: String,
    pub release_info: String,
    pub version: String,
    pub uuid: String,
    pub reference_identifier: String,
}

impl StigRecord {
    /// Reassemble a stig from this record and its rules
    ///
    /// `size` is re-derived from the rule count; any stale stored
    /// value is discarded here.
    pub fn into_stig(self, rules: Vec<ChecklistRule>) -> ChecklistStig {
        ChecklistStig {
            stig_name: self.stig_name,
            display_name: self.display_name,
            stig_id: self.stig_id,
            release_info: self.release_info,
            version: self.version,
            uuid: self.uuid,
            reference_identifier: self.reference_identifier,
            size: rules.len(),
            rules,
        }
    }
}

impl From<&ChecklistStig> for StigRecord {
    fn from(stig: &ChecklistStig) -> Self {
        Self {
            stig_name: stig.stig_name.clone(),
            display_name: stig.display_name.clone(),
            stig_id: stig.stig_id.clone(),
            release_info: stig.release_info.clone(),
            version: stig.version.clone(),
            uuid: stig.uuid.clone(),
            reference_identifier: stig.reference_identifier.clone(),
        }
    }
}

/// Membership row linking a checklist to a stig
///
/// `id` is assigned by the store on insert; `None` marks a row not yet
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistStigLink {
    pub id: Option<i64>,
    pub checklist_id: String,
    pub stig_uuid: String,
}

impl ChecklistStigLink {
    pub fn new(checklist_id: impl Into<String>, stig_uuid: impl Into<String>) -> Self {
        Self {
            id: None,
            checklist_id: checklist_id.into(),
            stig_uuid: stig_uuid.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::fixtures;

    #[test]
    fn checklist_record_round_trips_through_split_and_reassembly() {
        let checklist = fixtures::checklist("cl-1");
        let record = ChecklistRecord::from(&checklist);
        let rebuilt = record.into_checklist(checklist.stigs.clone());
        assert_eq!(rebuilt, checklist);
    }

    #[test]
    fn into_stig_rederives_size_from_the_rule_count() {
        let rules = vec![fixtures::rule("r1", "s1", "V-2230")];
        let mut stig = fixtures::stig("s1", rules.clone());
        stig.size = 99;
        let record = StigRecord::from(&stig);
        let rebuilt = record.into_stig(rules);
        assert_eq!(rebuilt.size, 1);
    }
}
