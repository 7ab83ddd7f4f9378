use crate::schema::CastError;
use thiserror::Error;

/// Checklist (CKLB) document parsing errors
#[derive(Debug, Error)]
pub enum ChecklistParseError {
    #[error("Checklist text is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Checklist document failed schema validation: {0}")]
    Cast(#[from] CastError),
}
