//! Whole-checklist export (reassembly) and import (split) across the
//! four stores

use super::db::Db;
use super::error::StoreResult;
use super::records::{ChecklistRecord, ChecklistStigLink, StigRecord};
use crate::checklist::Checklist;

impl Db {
    /// Reassemble a full checklist from the split stores
    ///
    /// The stig list follows link-row insertion order; rule lists come
    /// back in stable uuid order. Each stig's `size` is re-derived from
    /// its rule count, discarding whatever a previous import recorded.
    /// A link row pointing at a missing stig surfaces as `NotFound`.
    pub fn export_checklist(&self, id: &str) -> StoreResult<Checklist> {
        let record = self.checklists().get(id)?;

        let mut stigs = Vec::new();
        for link in self.checklist_stigs().by_checklist_id(id)? {
            let stig = self.stigs().get(&link.stig_uuid)?;
            let rules = self.rules().by_stig_uuid(&link.stig_uuid)?;
            stigs.push(stig.into_stig(rules));
        }

        Ok(record.into_checklist(stigs))
    }

    /// Split a checklist into the four stores
    ///
    /// Every write is a whole-record upsert, so re-importing an edited
    /// checklist replaces its rows in place; the link table's unique
    /// index keeps memberships single. Rules with an empty uuid have no
    /// storage key and are skipped with a warning rather than silently
    /// colliding under the empty string.
    pub fn import_checklist(&self, checklist: &Checklist) -> StoreResult<()> {
        self.checklists().put(&ChecklistRecord::from(checklist))?;

        for stig in &checklist.stigs {
            self.stigs().put(&StigRecord::from(stig))?;
            self.checklist_stigs()
                .put(&ChecklistStigLink::new(&checklist.id, &stig.uuid))?;

            for rule in &stig.rules {
                if rule.uuid.is_empty() {
                    log::warn!(
                        "Skipping rule {} in stig {}: no uuid to store under",
                        rule.rule_id,
                        stig.uuid
                    );
                    continue;
                }
                self.rules().put(rule)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::fixtures;
    use crate::store::error::StoreError;
    use assert_matches::assert_matches;

    #[test]
    fn import_then_export_round_trips_a_checklist() {
        let db = Db::open_in_memory().unwrap();
        let checklist = fixtures::checklist("cl-1");
        db.import_checklist(&checklist).unwrap();
        assert_eq!(db.export_checklist("cl-1").unwrap(), checklist);
    }

    #[test]
    fn export_of_a_missing_checklist_is_not_found() {
        let db = Db::open_in_memory().unwrap();
        assert_matches!(
            db.export_checklist("absent"),
            Err(StoreError::NotFound { store: "checklist", .. })
        );
    }

    #[test]
    fn export_rederives_a_stale_stig_size() {
        let db = Db::open_in_memory().unwrap();
        let mut checklist = fixtures::checklist("cl-1");
        checklist.stigs[0].size = 99;
        db.import_checklist(&checklist).unwrap();

        let exported = db.export_checklist("cl-1").unwrap();
        assert_eq!(exported.stigs[0].size, exported.stigs[0].rules.len());
    }

    #[test]
    fn reimporting_does_not_duplicate_stig_memberships() {
        let db = Db::open_in_memory().unwrap();
        let checklist = fixtures::checklist("cl-1");
        db.import_checklist(&checklist).unwrap();
        db.import_checklist(&checklist).unwrap();

        let exported = db.export_checklist("cl-1").unwrap();
        assert_eq!(exported.stigs.len(), 1);
        assert_eq!(
            db.checklist_stigs().by_checklist_id("cl-1").unwrap().len(),
            1
        );
    }

    #[test]
    fn reimporting_an_edited_checklist_replaces_its_rule_rows() {
        let db = Db::open_in_memory().unwrap();
        let mut checklist = fixtures::checklist("cl-1");
        db.import_checklist(&checklist).unwrap();

        checklist.stigs[0].rules[0].comments = "Waived for maintenance window".to_string();
        db.import_checklist(&checklist).unwrap();

        let exported = db.export_checklist("cl-1").unwrap();
        assert_eq!(
            exported.stigs[0].rules[0].comments,
            "Waived for maintenance window"
        );
    }

    #[test]
    fn rules_without_a_uuid_are_skipped_on_import() {
        let db = Db::open_in_memory().unwrap();
        let mut checklist = fixtures::checklist("cl-1");
        checklist.stigs[0].rules[0].uuid = String::new();
        db.import_checklist(&checklist).unwrap();

        let exported = db.export_checklist("cl-1").unwrap();
        assert_eq!(exported.stigs[0].rules.len(), 1);
        assert_eq!(exported.stigs[0].rules[0].uuid, "cl-1-r2");
    }

    #[test]
    fn two_checklists_sharing_the_store_stay_separate() {
        let db = Db::open_in_memory().unwrap();
        let a = fixtures::checklist("cl-a");
        let b = fixtures::checklist("cl-b");
        db.import_checklist(&a).unwrap();
        db.import_checklist(&b).unwrap();

        assert_eq!(db.export_checklist("cl-a").unwrap(), a);
        assert_eq!(db.export_checklist("cl-b").unwrap(), b);
    }
}
