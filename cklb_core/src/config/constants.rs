pub mod wire {
    /// Marker prefix for XML-attribute-derived keys in the source JSON
    /// (`+@id`, `+@severity`, ...)
    pub const ATTRIBUTE_MARKER: &str = "+@";

    /// Marker prefix for XML text-content keys in the source JSON
    /// (`+content`)
    pub const CONTENT_MARKER: &str = "+";
}

pub mod ident_systems {
    /// Ident system URI for CCI cross-references
    pub const CCI: &str = "http://cyber.mil/cci";

    /// Ident system URI for legacy vulnerability ids
    pub const LEGACY: &str = "http://cyber.mil/legacy";
}

pub mod checklist {
    /// CKLB document format version emitted and accepted
    pub const CKLB_VERSION: &str = "1.0";

    /// Fixed suffix stripped from source rule ids to form `rule_id`
    pub const RULE_ID_SUFFIX: &str = "_rule";

    /// `plain-text` entry id carrying the benchmark release string
    pub const RELEASE_INFO_ID: &str = "release-info";

    /// CKLB `mode` value for checklists created by the transformer
    pub const DEFAULT_MODE: i64 = 2;
}

pub mod merge {
    /// Quiet window before a batch of rule edits is considered due (ms).
    /// Write-amplification mitigation, not a correctness requirement.
    pub const DEBOUNCE_WINDOW_MS: u64 = 250;
}

pub mod store {
    /// Current persistence schema version, tracked via `PRAGMA user_version`
    pub const SCHEMA_VERSION: i32 = 1;

    /// Default database file name
    pub const DEFAULT_DB_FILE: &str = "cklb.db";
}
