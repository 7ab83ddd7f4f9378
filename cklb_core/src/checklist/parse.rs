//! Parse boundary: CKLB text <-> validated internal model

use super::error::ChecklistParseError;
use super::schema::{self, ROOT};
use super::types::Checklist;
use crate::schema::{cast, uncast, Schema};

/// Parse and validate a CKLB JSON document
pub fn parse_checklist(text: &str) -> Result<Checklist, ChecklistParseError> {
    let wire: serde_json::Value = serde_json::from_str(text)?;
    let internal = cast(&wire, &Schema::Ref(ROOT), schema::registry())?;
    let checklist = serde_json::from_value(internal)?;
    Ok(checklist)
}

/// Serialize a checklist, validating the output against the CKLB schema
pub fn checklist_to_json(checklist: &Checklist) -> Result<String, ChecklistParseError> {
    let internal = serde_json::to_value(checklist)?;
    let wire = uncast(&internal, &Schema::Ref(ROOT), schema::registry())?;
    Ok(serde_json::to_string_pretty(&wire)?)
}
