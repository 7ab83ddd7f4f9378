//! Change batching and no-op-suppressing merge

use std::collections::HashMap;

use super::error::{MergeError, PathError};
use super::paths::{parse_change_path, ChangePath, RuleField};
use crate::benchmark::Severity;
use crate::checklist::{ChecklistRule, SeverityOverride, Status};

/// Batched rule edits, keyed per rule uuid
///
/// Rapid-fire edits to the same field collapse to the latest value
/// (per-uuid batching, not per-keystroke).
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    by_uuid: HashMap<String, RuleEdit>,
}

/// Pending field values for one rule
#[derive(Debug, Clone, Default)]
struct RuleEdit {
    status: Option<String>,
    comments: Option<String>,
    finding_details: Option<String>,
    override_severity: Option<String>,
    override_reason: Option<String>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_uuid.is_empty()
    }

    /// Number of rules with pending edits
    pub fn rule_count(&self) -> usize {
        self.by_uuid.len()
    }

    /// Record an edit addressed by its flat change path
    pub fn record(&mut self, path: &str, value: &str) -> Result<(), PathError> {
        let parsed = parse_change_path(path)?;
        self.record_parsed(parsed, value.to_string());
        Ok(())
    }

    pub fn record_parsed(&mut self, path: ChangePath, value: String) {
        let edit = self.by_uuid.entry(path.uuid).or_default();
        match path.field {
            RuleField::Status => edit.status = Some(value),
            RuleField::Comments => edit.comments = Some(value),
            RuleField::FindingDetails => edit.finding_details = Some(value),
            RuleField::OverrideSeverity => edit.override_severity = Some(value),
            RuleField::OverrideReason => edit.override_reason = Some(value),
        }
    }

    pub fn merge_from(&mut self, other: ChangeSet) {
        for (uuid, incoming) in other.by_uuid {
            let edit = self.by_uuid.entry(uuid).or_default();
            if incoming.status.is_some() {
                edit.status = incoming.status;
            }
            if incoming.comments.is_some() {
                edit.comments = incoming.comments;
            }
            if incoming.finding_details.is_some() {
                edit.finding_details = incoming.finding_details;
            }
            if incoming.override_severity.is_some() {
                edit.override_severity = incoming.override_severity;
            }
            if incoming.override_reason.is_some() {
                edit.override_reason = incoming.override_reason;
            }
        }
    }
}

/// Apply a change set against the currently-persisted rules and return
/// only the rules that genuinely need a write
///
/// Each returned value is the whole updated rule record: the store's
/// unit of update is the rule, not individual fields. A change whose
/// result is deep-equal to the stored rule is suppressed; an override
/// whose severity equals the rule's original severity collapses away
/// (its reason is not meaningful and must not trigger a write).
pub fn merge_changes(
    current: &HashMap<String, ChecklistRule>,
    changes: &ChangeSet,
) -> Result<Vec<ChecklistRule>, MergeError> {
    let mut updated_rules = Vec::new();
    for (uuid, edit) in &changes.by_uuid {
        let Some(rule) = current.get(uuid) else {
            log::warn!("Dropping edit for unknown rule uuid {uuid}");
            continue;
        };
        let updated = apply_edit(rule, edit)?;
        if &updated != rule {
            updated_rules.push(updated);
        }
    }
    Ok(updated_rules)
}

fn apply_edit(rule: &ChecklistRule, edit: &RuleEdit) -> Result<ChecklistRule, MergeError> {
    let mut updated = rule.clone();

    if let Some(value) = &edit.status {
        updated.status =
            Status::from_str(value).ok_or_else(|| MergeError::invalid_status(value))?;
    }
    if let Some(value) = &edit.comments {
        updated.comments = value.clone();
    }
    if let Some(value) = &edit.finding_details {
        updated.finding_details = value.clone();
    }

    if let Some(value) = &edit.override_severity {
        let severity =
            Severity::from_str(value).ok_or_else(|| MergeError::invalid_severity(value))?;
        match &mut updated.overrides.severity {
            Some(existing) => existing.severity = severity,
            None => {
                updated.overrides.severity = Some(SeverityOverride {
                    severity,
                    reason: String::new(),
                });
            }
        }
    }
    if let Some(value) = &edit.override_reason {
        match &mut updated.overrides.severity {
            Some(existing) => existing.reason = value.clone(),
            // A reason with no severity yet: seed with the original
            // severity, which collapses below unless a severity edit
            // lands in the same batch.
            None => {
                updated.overrides.severity = Some(SeverityOverride {
                    severity: updated.severity,
                    reason: value.clone(),
                });
            }
        }
    }

    // An override equal to the source severity is not an override.
    if let Some(existing) = &updated.overrides.severity {
        if existing.severity == updated.severity {
            updated.overrides.severity = None;
        }
    }

    Ok(updated)
}
