//! Typed model of an exported NIST SP 800-171 framework document

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkDocument {
    pub response: FrameworkResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkResponse {
    pub request_type: i64,
    pub elements: ElementCollection,
}

/// The flat export payload: documents, relationship vocabulary, every
/// element of every type, and the relationships between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementCollection {
    pub documents: Vec<SourceDocument>,
    pub relationship_types: Vec<RelationshipType>,
    pub elements: Vec<Element>,
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub doc_identifier: String,
    pub name: String,
    pub version: String,
    pub website: String,
}

/// One framework element; its meaning depends on `element_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub element_type: ElementType,
    pub element_identifier: String,
    pub title: String,
    pub text: String,
    pub doc_identifier: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Determination,
    Discussion,
    Examine,
    Family,
    Interview,
    Odp,
    OdpStatement,
    OdpType,
    Reference,
    Requirement,
    SecurityRequirement,
    Test,
    WithdrawReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipType {
    pub relationship_identifier: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub source_element_identifier: String,
    pub source_doc_identifier: String,
    pub dest_element_identifier: String,
    pub dest_doc_identifier: String,
    pub relationship_identifier: String,
    pub provenance_doc_identifier: String,
}

/// Identifier slice, falling back to the full identifier when the
/// element's id is shorter than the slice expects
fn slice(identifier: &str, range: std::ops::Range<usize>) -> &str {
    identifier.get(range).unwrap_or(identifier)
}

fn slice_from(identifier: &str, start: usize) -> &str {
    identifier.get(start..).unwrap_or(identifier)
}

impl Element {
    /// Family identifier this element belongs to (e.g. `03.01`)
    ///
    /// Identifiers embed their ancestry positionally: a requirement is
    /// `03.01.01`, a security requirement `A.03.01.01.a`, a discussion
    /// `D.03.01.01`. Each type's family is a fixed slice of its id.
    pub fn family(&self) -> &str {
        match self.element_type {
            ElementType::Requirement => slice(&self.element_identifier, 0..5),
            ElementType::SecurityRequirement => slice(&self.element_identifier, 3..8),
            ElementType::Discussion => slice(&self.element_identifier, 2..7),
            _ => &self.element_identifier,
        }
    }

    /// Requirement identifier this element belongs to (e.g. `03.01.01`)
    pub fn requirement(&self) -> &str {
        match self.element_type {
            ElementType::Requirement => &self.element_identifier,
            ElementType::SecurityRequirement => slice(&self.element_identifier, 3..11),
            ElementType::Discussion => slice_from(&self.element_identifier, 2),
            ElementType::WithdrawReason => slice_from(&self.element_identifier, 3),
            _ => &self.element_identifier,
        }
    }

    /// Sub-requirement identifier (e.g. `03.01.01.a`)
    pub fn sub_requirement(&self) -> &str {
        match self.element_type {
            ElementType::SecurityRequirement => slice(&self.element_identifier, 3..13),
            _ => &self.element_identifier,
        }
    }

    /// Deepest identifier below the sub-requirement (e.g. `03.01.01.a[01]`)
    pub fn sub_sub_requirement(&self) -> &str {
        match self.element_type {
            ElementType::SecurityRequirement => slice_from(&self.element_identifier, 3),
            _ => &self.element_identifier,
        }
    }
}

impl ElementCollection {
    /// Elements of one type, in identifier order
    pub fn of_type(&self, element_type: ElementType) -> Vec<&Element> {
        let mut elements: Vec<&Element> = self
            .elements
            .iter()
            .filter(|e| e.element_type == element_type)
            .collect();
        elements.sort_by(|a, b| a.element_identifier.cmp(&b.element_identifier));
        elements
    }

    pub fn families(&self) -> Vec<&Element> {
        self.of_type(ElementType::Family)
    }

    /// Requirements still in force
    ///
    /// A withdraw-reason element's requirement slice names the
    /// requirement it retires; those requirements are filtered out.
    pub fn requirements(&self) -> Vec<&Element> {
        let withdrawn: HashSet<&str> = self
            .of_type(ElementType::WithdrawReason)
            .iter()
            .map(|e| e.requirement())
            .collect();
        self.of_type(ElementType::Requirement)
            .into_iter()
            .filter(|e| !withdrawn.contains(e.element_identifier.as_str()))
            .collect()
    }

    /// Security requirements with statement text; placeholder entries
    /// with empty text are dropped
    pub fn security_requirements(&self) -> Vec<&Element> {
        self.of_type(ElementType::SecurityRequirement)
            .into_iter()
            .filter(|e| !e.text.is_empty())
            .collect()
    }

    pub fn discussions(&self) -> Vec<&Element> {
        self.of_type(ElementType::Discussion)
    }
}
