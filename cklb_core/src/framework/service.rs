//! Cached framework loading

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::FrameworkError;
use super::schema::{self, ROOT};
use super::types::FrameworkDocument;
use crate::schema::{cast, Schema};

/// Parse and validate a framework JSON export
pub fn parse_framework(text: &str) -> Result<FrameworkDocument, FrameworkError> {
    let wire: serde_json::Value = serde_json::from_str(text)?;
    let internal = cast(&wire, &Schema::Ref(ROOT), schema::registry())?;
    let document = serde_json::from_value(internal)?;
    Ok(document)
}

/// Framework documents cached by source path
///
/// The cache is owned and explicit: nothing populates it outside
/// `load`, and `reset` empties it, so each test controls exactly what
/// has been loaded.
#[derive(Default)]
pub struct FrameworkService {
    cache: HashMap<PathBuf, FrameworkDocument>,
}

impl FrameworkService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a framework document, reading the file only on first use
    pub fn load(&mut self, path: &Path) -> Result<&FrameworkDocument, FrameworkError> {
        if !self.cache.contains_key(path) {
            log::debug!("Loading framework document from {}", path.display());
            let text = fs::read_to_string(path)?;
            let document = parse_framework(&text)?;
            self.cache.insert(path.to_path_buf(), document);
        }
        Ok(&self.cache[path])
    }

    /// Already-loaded document for a path, if any
    pub fn get(&self, path: &Path) -> Option<&FrameworkDocument> {
        self.cache.get(path)
    }

    /// Drop every cached document
    pub fn reset(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::types::ElementType;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn framework_json() -> String {
        serde_json::json!({
            "response": {
                "requestType": 0,
                "elements": {
                    "documents": [{
                        "doc_identifier": "SP_800_171_3_0_0",
                        "name": "NIST SP 800-171",
                        "version": "3.0.0",
                        "website": "https://csrc.nist.gov"
                    }],
                    "relationship_types": [{
                        "relationship_identifier": "projection",
                        "description": "projection"
                    }],
                    "elements": [
                        {
                            "element_type": "family",
                            "element_identifier": "03.01",
                            "title": "Access Control",
                            "text": "",
                            "doc_identifier": "SP_800_171_3_0_0"
                        },
                        {
                            "element_type": "requirement",
                            "element_identifier": "03.01.01",
                            "title": "Account Management",
                            "text": "",
                            "doc_identifier": "SP_800_171_3_0_0"
                        }
                    ],
                    "relationships": []
                }
            }
        })
        .to_string()
    }

    fn write_framework_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_framework_accepts_a_valid_export() {
        let document = parse_framework(&framework_json()).unwrap();
        assert_eq!(document.response.elements.elements.len(), 2);
        assert_eq!(
            document.response.elements.elements[0].element_type,
            ElementType::Family
        );
    }

    #[test]
    fn parse_framework_rejects_an_unknown_element_type() {
        let text = framework_json().replace("\"family\"", "\"galaxy\"");
        assert_matches!(parse_framework(&text), Err(FrameworkError::Cast(_)));
    }

    #[test]
    fn load_caches_by_path_and_reset_clears() {
        let file = write_framework_file(&framework_json());
        let mut service = FrameworkService::new();

        assert!(service.get(file.path()).is_none());
        service.load(file.path()).unwrap();
        assert!(service.get(file.path()).is_some());

        // A stale file no longer matters once the document is cached
        fs::write(file.path(), "not json").unwrap();
        assert!(service.load(file.path()).is_ok());

        service.reset();
        assert!(service.get(file.path()).is_none());
        assert_matches!(service.load(file.path()), Err(FrameworkError::Json(_)));
    }

    #[test]
    fn load_surfaces_a_missing_file() {
        let mut service = FrameworkService::new();
        assert_matches!(
            service.load(Path::new("/nonexistent/framework.json")),
            Err(FrameworkError::Io(_))
        );
    }
}
