//! Database handle and schema-on-open migration

use std::path::Path;

use rusqlite::Connection;

use super::error::StoreResult;
use super::stores::{ChecklistStigStore, ChecklistStore, RuleStore, StigStore};
use crate::config::constants::store::SCHEMA_VERSION;

const SCHEMA_V1: &str = "
CREATE TABLE IF NOT EXISTS checklists (
    id     TEXT PRIMARY KEY,
    title  TEXT NOT NULL,
    active INTEGER NOT NULL,
    mode   INTEGER NOT NULL,
    doc    TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_checklists_title  ON checklists(title);
CREATE INDEX IF NOT EXISTS idx_checklists_active ON checklists(active);
CREATE INDEX IF NOT EXISTS idx_checklists_mode   ON checklists(mode);

CREATE TABLE IF NOT EXISTS stigs (
    uuid      TEXT PRIMARY KEY,
    stig_id   TEXT NOT NULL,
    stig_name TEXT NOT NULL,
    doc       TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_stigs_stig_id   ON stigs(stig_id);
CREATE INDEX IF NOT EXISTS idx_stigs_stig_name ON stigs(stig_name);

CREATE TABLE IF NOT EXISTS rules (
    uuid      TEXT PRIMARY KEY,
    group_id  TEXT NOT NULL,
    rule_id   TEXT NOT NULL,
    stig_uuid TEXT NOT NULL,
    status    TEXT NOT NULL,
    severity  TEXT NOT NULL,
    doc       TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_rules_group_id  ON rules(group_id);
CREATE INDEX IF NOT EXISTS idx_rules_rule_id   ON rules(rule_id);
CREATE INDEX IF NOT EXISTS idx_rules_stig_uuid ON rules(stig_uuid);
CREATE INDEX IF NOT EXISTS idx_rules_status    ON rules(status);
CREATE INDEX IF NOT EXISTS idx_rules_severity  ON rules(severity);

CREATE TABLE IF NOT EXISTS checklist_stigs (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    checklist_id TEXT NOT NULL,
    stig_uuid    TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_checklist_stigs_checklist_id ON checklist_stigs(checklist_id);
CREATE INDEX IF NOT EXISTS idx_checklist_stigs_stig_uuid    ON checklist_stigs(stig_uuid);
CREATE UNIQUE INDEX IF NOT EXISTS idx_checklist_stig
    ON checklist_stigs(checklist_id, stig_uuid);
";

/// Handle over the four record stores
///
/// Single-connection, single-writer usage: two concurrent whole-record
/// writes to the same rule uuid are last-writer-wins, an accepted
/// limitation of the single-user design.
pub struct Db {
    conn: Connection,
}

impl Db {
    /// Open (creating if needed) a database file and apply migrations
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::initialize(conn)
    }

    /// In-memory database, used by tests
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> StoreResult<Self> {
        apply_migrations(&conn)?;
        Ok(Self { conn })
    }

    pub(super) fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn checklists(&self) -> ChecklistStore<'_> {
        ChecklistStore::new(self)
    }

    pub fn stigs(&self) -> StigStore<'_> {
        StigStore::new(self)
    }

    pub fn rules(&self) -> RuleStore<'_> {
        RuleStore::new(self)
    }

    pub fn checklist_stigs(&self) -> ChecklistStigStore<'_> {
        ChecklistStigStore::new(self)
    }

    /// Current schema version of the open database
    pub fn schema_version(&self) -> StoreResult<i32> {
        Ok(read_user_version(&self.conn)?)
    }
}

fn read_user_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Apply schema migrations up to [`SCHEMA_VERSION`]
///
/// Idempotent: re-running against an already-migrated database is a
/// no-op.
fn apply_migrations(conn: &Connection) -> StoreResult<()> {
    let version = read_user_version(conn)?;
    if version < 1 {
        log::debug!("Migrating store schema from version {version} to {SCHEMA_VERSION}");
        conn.execute_batch(SCHEMA_V1)?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }
    Ok(())
}
