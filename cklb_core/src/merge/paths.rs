//! Flat change-path vocabulary for rule edits

use super::error::PathError;

/// Editable rule fields addressable by a change path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleField {
    Status,
    Comments,
    FindingDetails,
    OverrideSeverity,
    OverrideReason,
}

impl RuleField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "status" => Some(Self::Status),
            "comments" => Some(Self::Comments),
            "finding_details" => Some(Self::FindingDetails),
            "overrides.severity.severity" => Some(Self::OverrideSeverity),
            "overrides.severity.reason" => Some(Self::OverrideReason),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Comments => "comments",
            Self::FindingDetails => "finding_details",
            Self::OverrideSeverity => "overrides.severity.severity",
            Self::OverrideReason => "overrides.severity.reason",
        }
    }
}

/// Parsed change path: target rule uuid + field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePath {
    pub uuid: String,
    pub field: RuleField,
}

/// Parse a change path of the form `rule.<uuid>.<field>[.<subfield>...]`
///
/// The uuid never contains a dot, so the first dot after the prefix
/// ends it; everything after that is the field spelling.
pub fn parse_change_path(path: &str) -> Result<ChangePath, PathError> {
    let rest = path
        .strip_prefix("rule.")
        .ok_or_else(|| PathError::bad_prefix(path))?;
    let (uuid, field_text) = rest
        .split_once('.')
        .ok_or_else(|| PathError::missing_field(path))?;
    if uuid.is_empty() || field_text.is_empty() {
        return Err(PathError::missing_field(path));
    }
    let field =
        RuleField::from_str(field_text).ok_or_else(|| PathError::unknown_field(path, field_text))?;
    Ok(ChangePath {
        uuid: uuid.to_string(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_every_field_in_the_vocabulary() {
        let cases = [
            ("rule.abc-123.status", RuleField::Status),
            ("rule.abc-123.comments", RuleField::Comments),
            ("rule.abc-123.finding_details", RuleField::FindingDetails),
            (
                "rule.abc-123.overrides.severity.severity",
                RuleField::OverrideSeverity,
            ),
            (
                "rule.abc-123.overrides.severity.reason",
                RuleField::OverrideReason,
            ),
        ];
        for (text, field) in cases {
            let parsed = parse_change_path(text).unwrap();
            assert_eq!(parsed.uuid, "abc-123");
            assert_eq!(parsed.field, field);
        }
    }

    #[test]
    fn rejects_paths_outside_the_rule_namespace() {
        assert_matches!(
            parse_change_path("checklist.abc.title").unwrap_err(),
            PathError::BadPrefix { .. }
        );
    }

    #[test]
    fn rejects_a_path_without_a_field_segment() {
        assert_matches!(
            parse_change_path("rule.abc-123").unwrap_err(),
            PathError::MissingField { .. }
        );
    }

    #[test]
    fn rejects_an_unknown_field() {
        assert_matches!(
            parse_change_path("rule.abc-123.severity").unwrap_err(),
            PathError::UnknownField { field, .. } => {
                assert_eq!(field, "severity");
            }
        );
    }
}
