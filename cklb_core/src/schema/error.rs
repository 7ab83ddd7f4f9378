use thiserror::Error;

/// Result type for schema casting operations
pub type CastResult<T> = Result<T, CastError>;

/// Schema casting error types
///
/// All variants are fatal to the caller: a cast failure means the input
/// document does not match the declared schema and there is nothing to
/// recover. Messages name the offending key so version/data mismatches
/// are diagnosable from the error alone.
#[derive(Debug, Clone, Error)]
pub enum CastError {
    /// Value has a different JSON type than the schema requires
    #[error("Invalid value for key \"{key}\": expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// String value is not one of the allowed enum literals
    #[error("Invalid value for key \"{key}\": \"{value}\" is not one of [{allowed}]")]
    InvalidEnumValue {
        key: String,
        value: String,
        allowed: String,
    },

    /// No member of a union schema matched the value
    #[error("Invalid value for key \"{key}\": no union member matched")]
    NoUnionMatch { key: String },

    /// Required object property is absent
    #[error("Missing required property \"{property}\" on \"{key}\"")]
    MissingProperty { key: String, property: String },

    /// Property not declared in the schema, under a deny policy
    #[error("Unexpected property \"{property}\" on \"{key}\"")]
    UnexpectedProperty { key: String, property: String },

    /// Named schema reference not present in the registry
    #[error("Unknown schema reference \"{name}\"")]
    UnknownRef { name: String },
}

impl CastError {
    pub fn type_mismatch(key: &str, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
        }
    }

    pub fn invalid_enum_value(key: &str, value: &str, allowed: &[&str]) -> Self {
        Self::InvalidEnumValue {
            key: key.to_string(),
            value: value.to_string(),
            allowed: allowed.join(", "),
        }
    }

    pub fn no_union_match(key: &str) -> Self {
        Self::NoUnionMatch {
            key: key.to_string(),
        }
    }

    pub fn missing_property(key: &str, property: &str) -> Self {
        Self::MissingProperty {
            key: key.to_string(),
            property: property.to_string(),
        }
    }

    pub fn unexpected_property(key: &str, property: &str) -> Self {
        Self::UnexpectedProperty {
            key: key.to_string(),
            property: property.to_string(),
        }
    }

    pub fn unknown_ref(name: &str) -> Self {
        Self::UnknownRef {
            name: name.to_string(),
        }
    }
}
