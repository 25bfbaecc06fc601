use std::path::Path;

use tracing::{debug, info};

use ccx_core::{
    extract_fields, mismatch_free, ClientReport, ClientVerdict, ComparisonRecord, FieldIndex,
};

use crate::load_client_documents;

fn base_name(path: &Path) -> String {
    path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Cross-validates one client directory.
///
/// Loads whichever recognized documents exist, flattens them into one field
/// index, compares every document pair that shares a field, and aggregates a
/// verdict. Returns `None` when fewer than two documents load: one document
/// is an insufficient basis for cross-validation, a defined early-exit
/// rather than an error.
pub fn validate_client(client_dir: &Path) -> Option<ClientReport> {
    let client_id = base_name(client_dir);
    debug!(client = %client_id, "validating");

    let docs = load_client_documents(client_dir);
    if docs.len() < 2 {
        info!(client = %client_id, loaded = docs.len(), "not enough documents to validate");
        return None;
    }

    let mut index = FieldIndex::new();
    for (kind, value) in &docs {
        extract_fields(value, "", *kind, &mut index);
    }

    // Every unordered document pair sharing a field, in load order.
    let mut records = Vec::new();
    for (field, by_doc) in index.iter() {
        if by_doc.len() < 2 {
            continue;
        }
        let entries: Vec<_> = by_doc.iter().collect();
        for i in 0..entries.len() {
            for j in i + 1..entries.len() {
                let (doc_a, value_a) = entries[i];
                let (doc_b, value_b) = entries[j];
                records.push(ComparisonRecord::new(field, *doc_a, value_a, *doc_b, value_b));
            }
        }
    }

    let valid = mismatch_free(&records);
    let grouping = client_dir.parent().map(base_name).unwrap_or_default();
    let verdict = ClientVerdict {
        client_id,
        valid,
        grouping,
        path: client_dir.display().to_string(),
        fields_validated: records.len(),
        document_types: docs.iter().map(|(k, _)| *k).collect(),
    };
    Some(ClientReport { verdict, records })
}
