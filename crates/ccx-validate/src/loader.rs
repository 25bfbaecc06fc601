use std::path::Path;

use serde_json::Value;
use tracing::warn;

use ccx_core::{DocKind, DocumentError};

/// Reads and parses one JSON document.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads whichever recognized documents exist in a client directory, in the
/// fixed kind order. A missing file is skipped silently; a file that exists
/// but fails to load is logged and treated as absent. Never fatal.
pub fn load_client_documents(client_dir: &Path) -> Vec<(DocKind, Value)> {
    let mut docs = Vec::new();
    for kind in DocKind::ALL {
        let path = client_dir.join(kind.file_name());
        if !path.exists() {
            continue;
        }
        match load_document(&path) {
            Ok(value) => docs.push((kind, value)),
            Err(err) => warn!(doc = kind.as_str(), error = %err, "skipping unloadable document"),
        }
    }
    docs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn loads_documents_in_kind_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "account_form.json", r#"{"a": 1}"#);
        write(dir.path(), "passport.json", r#"{"p": 1}"#);

        let docs = load_client_documents(dir.path());
        let kinds: Vec<DocKind> = docs.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, [DocKind::Passport, DocKind::AccountForm]);
    }

    #[test]
    fn unparsable_document_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "passport.json", "{not json");
        write(dir.path(), "client_profile.json", r#"{"name": "x"}"#);

        let docs = load_client_documents(dir.path());
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].0, DocKind::ClientProfile);
    }

    #[test]
    fn load_errors_carry_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("passport.json");
        let err = load_document(&missing).unwrap_err();
        assert_eq!(err.path(), &missing);
        assert!(matches!(err, DocumentError::Read { .. }));

        write(dir.path(), "bad.json", "[1,");
        let err = load_document(&dir.path().join("bad.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Parse { .. }));
    }
}
