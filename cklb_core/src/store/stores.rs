//! Per-table store accessors
//!
//! Each accessor borrows the shared [`Db`] connection and exposes the
//! same surface: keyed `get`, `get_all`, whole-record `put`, `clear`,
//! plus the indexed lookups its callers need. Writes are whole-record
//! upserts; a `put` with an existing key replaces the row.

use rusqlite::{params, OptionalExtension};

use super::db::Db;
use super::error::{StoreError, StoreResult};
use super::records::{ChecklistRecord, ChecklistStigLink, StigRecord};
use crate::checklist::ChecklistRule;

/// Checklist rows, keyed by checklist id
pub struct ChecklistStore<'a> {
    db: &'a Db,
}

impl<'a> ChecklistStore<'a> {
    pub(super) fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn get(&self, id: &str) -> StoreResult<ChecklistRecord> {
        let doc: Option<String> = self
            .db
            .conn()
            .query_row(
                "SELECT doc FROM checklists WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        match doc {
            Some(doc) => Ok(serde_json::from_str(&doc)?),
            None => Err(StoreError::not_found("checklist", id)),
        }
    }

    pub fn get_all(&self) -> StoreResult<Vec<ChecklistRecord>> {
        let mut stmt = self
            .db
            .conn()
            .prepare("SELECT doc FROM checklists ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut records = Vec::new();
        for doc in rows {
            records.push(serde_json::from_str(&doc?)?);
        }
        Ok(records)
    }

    pub fn put(&self, record: &ChecklistRecord) -> StoreResult<()> {
        let doc = serde_json::to_string(record)?;
        self.db.conn().execute(
            "INSERT OR REPLACE INTO checklists (id, title, active, mode, doc)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![record.id, record.title, record.active, record.mode, doc],
        )?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.db
            .conn()
            .execute("DELETE FROM checklists WHERE id = ?1", params![id])?;
        Ok(())
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.db.conn().execute("DELETE FROM checklists", [])?;
        Ok(())
    }
}

/// Stig rows, keyed by stig uuid
pub struct StigStore<'a> {
    db: &'a Db,
}

impl<'a> StigStore<'a> {
    pub(super) fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn get(&self, uuid: &str) -> StoreResult<StigRecord> {
        let doc: Option<String> = self
            .db
            .conn()
            .query_row(
                "SELECT doc FROM stigs WHERE uuid = ?1",
                params![uuid],
                |row| row.get(0),
            )
            .optional()?;
        match doc {
            Some(doc) => Ok(serde_json::from_str(&doc)?),
            None => Err(StoreError::not_found("stig", uuid)),
        }
    }

    pub fn get_all(&self) -> StoreResult<Vec<StigRecord>> {
        let mut stmt = self.db.conn().prepare("SELECT doc FROM stigs ORDER BY uuid")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut records = Vec::new();
        for doc in rows {
            records.push(serde_json::from_str(&doc?)?);
        }
        Ok(records)
    }

    pub fn put(&self, record: &StigRecord) -> StoreResult<()> {
        let doc = serde_json::to_string(record)?;
        self.db.conn().execute(
            "INSERT OR REPLACE INTO stigs (uuid, stig_id, stig_name, doc)
             VALUES (?1, ?2, ?3, ?4)",
            params![record.uuid, record.stig_id, record.stig_name, doc],
        )?;
        Ok(())
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.db.conn().execute("DELETE FROM stigs", [])?;
        Ok(())
    }
}

/// Rule rows, keyed by rule uuid with an index on the owning stig
pub struct RuleStore<'a> {
    db: &'a Db,
}

impl<'a> RuleStore<'a> {
    pub(super) fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn get(&self, uuid: &str) -> StoreResult<ChecklistRule> {
        let doc: Option<String> = self
            .db
            .conn()
            .query_row(
                "SELECT doc FROM rules WHERE uuid = ?1",
                params![uuid],
                |row| row.get(0),
            )
            .optional()?;
        match doc {
            Some(doc) => Ok(serde_json::from_str(&doc)?),
            None => Err(StoreError::not_found("rule", uuid)),
        }
    }

    /// All rules owned by a stig, in stable uuid order
    pub fn by_stig_uuid(&self, stig_uuid: &str) -> StoreResult<Vec<ChecklistRule>> {
        let mut stmt = self
            .db
            .conn()
            .prepare("SELECT doc FROM rules WHERE stig_uuid = ?1 ORDER BY uuid")?;
        let rows = stmt.query_map(params![stig_uuid], |row| row.get::<_, String>(0))?;
        let mut rules = Vec::new();
        for doc in rows {
            rules.push(serde_json::from_str(&doc?)?);
        }
        Ok(rules)
    }

    pub fn put(&self, rule: &ChecklistRule) -> StoreResult<()> {
        let doc = serde_json::to_string(rule)?;
        self.db.conn().execute(
            "INSERT OR REPLACE INTO rules
                 (uuid, group_id, rule_id, stig_uuid, status, severity, doc)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                rule.uuid,
                rule.group_id,
                rule.rule_id,
                rule.stig_uuid,
                rule.status.as_str(),
                rule.severity.as_str(),
                doc
            ],
        )?;
        Ok(())
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.db.conn().execute("DELETE FROM rules", [])?;
        Ok(())
    }
}

/// Checklist-to-stig membership rows
pub struct ChecklistStigStore<'a> {
    db: &'a Db,
}

impl<'a> ChecklistStigStore<'a> {
    pub(super) fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// All stig memberships for a checklist, in insertion order
    pub fn by_checklist_id(&self, checklist_id: &str) -> StoreResult<Vec<ChecklistStigLink>> {
        let mut stmt = self.db.conn().prepare(
            "SELECT id, checklist_id, stig_uuid FROM checklist_stigs
             WHERE checklist_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![checklist_id], |row| {
            Ok(ChecklistStigLink {
                id: Some(row.get(0)?),
                checklist_id: row.get(1)?,
                stig_uuid: row.get(2)?,
            })
        })?;
        let mut links = Vec::new();
        for link in rows {
            links.push(link?);
        }
        Ok(links)
    }

    /// Insert a membership row, assigning its id
    ///
    /// The unique (checklist_id, stig_uuid) index makes re-inserting an
    /// existing membership a no-op, so importing the same checklist
    /// twice cannot duplicate links.
    pub fn put(&self, link: &ChecklistStigLink) -> StoreResult<()> {
        self.db.conn().execute(
            "INSERT OR IGNORE INTO checklist_stigs (checklist_id, stig_uuid)
             VALUES (?1, ?2)",
            params![link.checklist_id, link.stig_uuid],
        )?;
        Ok(())
    }

    pub fn delete_by_checklist_id(&self, checklist_id: &str) -> StoreResult<()> {
        self.db.conn().execute(
            "DELETE FROM checklist_stigs WHERE checklist_id = ?1",
            params![checklist_id],
        )?;
        Ok(())
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.db.conn().execute("DELETE FROM checklist_stigs", [])?;
        Ok(())
    }
}
