use serde_json::Value;

use crate::{DocKind, FieldIndex};

/// Flattens a document into dotted/indexed field paths and records every
/// leaf in the index under the given document kind. Mapping keys join with
/// `.`, sequence elements with `[i]`; scalars (null included) are leaves.
pub fn extract_fields(value: &Value, prefix: &str, kind: DocKind, index: &mut FieldIndex) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                extract_fields(child, &path, kind, index);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                extract_fields(child, &format!("{prefix}[{i}]"), kind, index);
            }
        }
        leaf => index.record(prefix.to_string(), kind, leaf.clone()),
    }
}
