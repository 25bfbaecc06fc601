use std::collections::BTreeMap;

use serde_json::Value;

use crate::DocKind;

/// Merged view of every leaf field across one client's documents:
/// field path -> which document said what. Built fresh per client and
/// discarded after its verdict.
#[derive(Clone, Debug, Default)]
pub struct FieldIndex {
    fields: BTreeMap<String, BTreeMap<DocKind, Value>>,
}

impl FieldIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: String, kind: DocKind, value: Value) {
        self.fields.entry(path).or_default().insert(kind, value);
    }

    /// Field paths in lexical order; per-path entries in document load order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<DocKind, Value>)> {
        self.fields.iter()
    }

    pub fn get(&self, path: &str) -> Option<&BTreeMap<DocKind, Value>> {
        self.fields.get(path)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
