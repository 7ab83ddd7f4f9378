use thiserror::Error;

/// Result type for transformation operations
pub type TransformResult<T> = Result<T, TransformError>;

/// Referential errors raised while transforming a benchmark
///
/// These indicate a mismatched profile/benchmark pairing (caller misuse
/// or a version/data mismatch), not a recoverable condition; no partial
/// checklist is ever produced.
#[derive(Debug, Clone, Error)]
pub enum TransformError {
    /// Requested profile id is not present in the benchmark
    #[error("Profile \"{profile_id}\" not found in benchmark \"{benchmark_id}\"")]
    ProfileNotFound {
        profile_id: String,
        benchmark_id: String,
    },

    /// Transformation requires at least one selected profile
    #[error("At least one profile must be selected")]
    NoProfilesSelected,

    /// A selection idref does not resolve to any group in the benchmark
    #[error("Selection \"{idref}\" in profile \"{profile_id}\" does not resolve to a group")]
    SelectionUnresolved { idref: String, profile_id: String },
}

impl TransformError {
    pub fn profile_not_found(profile_id: &str, benchmark_id: &str) -> Self {
        Self::ProfileNotFound {
            profile_id: profile_id.to_string(),
            benchmark_id: benchmark_id.to_string(),
        }
    }

    pub fn selection_unresolved(idref: &str, profile_id: &str) -> Self {
        Self::SelectionUnresolved {
            idref: idref.to_string(),
            profile_id: profile_id.to_string(),
        }
    }
}
