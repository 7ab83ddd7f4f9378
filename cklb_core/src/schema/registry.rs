//! Named schema registry

use super::types::Schema;
use std::collections::HashMap;

/// Registry of named schemas for one document family
///
/// Built once per family (lazily, behind a `OnceLock`) and shared by
/// every cast/uncast call against that family.
#[derive(Debug, Default)]
pub struct Registry {
    types: HashMap<&'static str, Schema>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &'static str, schema: Schema) {
        self.types.insert(name, schema);
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
