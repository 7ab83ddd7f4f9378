use crate::schema::CastError;
use thiserror::Error;

/// Benchmark document parsing errors
#[derive(Debug, Error)]
pub enum BenchmarkParseError {
    #[error("Benchmark text is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Benchmark document failed schema validation: {0}")]
    Cast(#[from] CastError),
}
