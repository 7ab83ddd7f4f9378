use crate::schema::CastError;
use thiserror::Error;

/// Framework document loading and parsing errors
#[derive(Debug, Error)]
pub enum FrameworkError {
    #[error("Could not read framework document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Framework text is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Framework document failed schema validation: {0}")]
    Cast(#[from] CastError),
}
