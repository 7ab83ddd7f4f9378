use thiserror::Error;

/// Result type for persistence operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence layer error types
///
/// A failed operation is surfaced to the caller and logged, never
/// retried; callers depending on the store degrade rather than crash.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested key is absent from its store
    #[error("No {store} record found for key \"{key}\"")]
    NotFound { store: &'static str, key: String },

    /// Underlying store open/statement/transaction failure
    #[error("Store operation failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored document column failed to (de)serialize
    #[error("Stored record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(store: &'static str, key: &str) -> Self {
        Self::NotFound {
            store,
            key: key.to_string(),
        }
    }
}
