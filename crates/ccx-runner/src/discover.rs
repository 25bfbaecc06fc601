use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use ccx_core::DocKind;

use crate::DiscoveryConfig;

/// A client directory found under `<root>/<grouping>/<client>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientDir {
    pub grouping: String,
    pub client_id: String,
    pub path: PathBuf,
}

fn subdirs(dir: &Path, prefix: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() && name.starts_with(prefix) {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

fn has_recognized_document(dir: &Path) -> bool {
    DocKind::ALL.iter().any(|kind| dir.join(kind.file_name()).exists())
}

/// Finds all client directories two levels below the root: grouping
/// directories first, then client directories containing at least one
/// recognized document file. Only a failure to enumerate the root itself is
/// fatal; an unreadable grouping directory is logged and skipped.
pub fn find_client_dirs(root: &Path, cfg: &DiscoveryConfig) -> Result<Vec<ClientDir>> {
    let groupings = subdirs(root, &cfg.grouping_prefix)
        .with_context(|| format!("enumerate root {}", root.display()))?;
    info!(count = groupings.len(), "found grouping directories");

    let mut clients = Vec::new();
    for grouping_dir in groupings {
        let grouping = grouping_dir
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let candidates = match subdirs(&grouping_dir, &cfg.client_prefix) {
            Ok(c) => c,
            Err(err) => {
                warn!(grouping = %grouping, error = %err, "skipping unreadable grouping directory");
                continue;
            }
        };
        for path in candidates {
            if !has_recognized_document(&path) {
                continue;
            }
            let client_id = path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            clients.push(ClientDir { grouping: grouping.clone(), client_id, path });
        }
    }
    Ok(clients)
}
