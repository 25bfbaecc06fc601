use std::path::PathBuf;

use thiserror::Error;

/// Why a document could not be produced from a file. Callers at the
/// orchestration boundary reduce both variants to "document unavailable";
/// the distinction stays visible in logs.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {} as JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DocumentError {
    pub fn path(&self) -> &PathBuf {
        match self {
            DocumentError::Read { path, .. } => path,
            DocumentError::Parse { path, .. } => path,
        }
    }
}
