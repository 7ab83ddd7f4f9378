use thiserror::Error;

/// Change-path parsing errors
#[derive(Debug, Clone, Error)]
pub enum PathError {
    #[error("Change path \"{path}\" must start with \"rule.\"")]
    BadPrefix { path: String },

    #[error("Change path \"{path}\" is missing its field segment")]
    MissingField { path: String },

    #[error("Unknown rule field \"{field}\" in change path \"{path}\"")]
    UnknownField { path: String, field: String },
}

impl PathError {
    pub fn bad_prefix(path: &str) -> Self {
        Self::BadPrefix {
            path: path.to_string(),
        }
    }

    pub fn missing_field(path: &str) -> Self {
        Self::MissingField {
            path: path.to_string(),
        }
    }

    pub fn unknown_field(path: &str, field: &str) -> Self {
        Self::UnknownField {
            path: path.to_string(),
            field: field.to_string(),
        }
    }
}

/// Merge evaluation errors
#[derive(Debug, Clone, Error)]
pub enum MergeError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("\"{value}\" is not a valid status")]
    InvalidStatus { value: String },

    #[error("\"{value}\" is not a valid severity")]
    InvalidSeverity { value: String },
}

impl MergeError {
    pub fn invalid_status(value: &str) -> Self {
        Self::InvalidStatus {
            value: value.to_string(),
        }
    }

    pub fn invalid_severity(value: &str) -> Self {
        Self::InvalidSeverity {
            value: value.to_string(),
        }
    }
}
