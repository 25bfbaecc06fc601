use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};
use walkdir::WalkDir;
use zip::ZipArchive;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("io error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("zip error at {}", path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

/// What one `expand_all` run did.
#[derive(Clone, Debug, Default)]
pub struct ExpansionReport {
    pub extracted: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    pub passes: usize,
}

/// Every `.zip` file under the root, in path order.
pub fn find_archives(root: &Path) -> Vec<PathBuf> {
    let mut archives: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "zip"))
        .collect();
    archives.sort();
    archives
}

/// Extracts one archive into the target directory.
pub fn expand_archive(archive: &Path, target: &Path) -> Result<(), ArchiveError> {
    std::fs::create_dir_all(target)
        .map_err(|source| ArchiveError::Io { path: target.to_path_buf(), source })?;
    let file = File::open(archive)
        .map_err(|source| ArchiveError::Io { path: archive.to_path_buf(), source })?;
    let mut zip = ZipArchive::new(file)
        .map_err(|source| ArchiveError::Zip { path: archive.to_path_buf(), source })?;
    zip.extract(target)
        .map_err(|source| ArchiveError::Zip { path: archive.to_path_buf(), source })
}

/// Recursively discovers and expands archives under the root, each into a
/// sibling directory named after the archive minus its extension. Rescans
/// after every pass so archives nested inside archives are picked up, and
/// stops once a scan finds nothing new. A failing archive is logged, skipped
/// for the rest of the run, and a later run will see it again if it is still
/// present. Only an unreadable root is fatal.
pub fn expand_all(root: &Path) -> Result<ExpansionReport, ArchiveError> {
    std::fs::read_dir(root)
        .map_err(|source| ArchiveError::Io { path: root.to_path_buf(), source })?;

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut report = ExpansionReport::default();
    loop {
        let pending: Vec<PathBuf> =
            find_archives(root).into_iter().filter(|p| !seen.contains(p)).collect();
        if pending.is_empty() {
            break;
        }
        report.passes += 1;
        for archive in pending {
            let target = archive.with_extension("");
            info!(archive = %archive.display(), target = %target.display(), "expanding");
            seen.insert(archive.clone());
            match expand_archive(&archive, &target) {
                Ok(()) => report.extracted.push(archive),
                Err(err) => {
                    warn!(archive = %archive.display(), error = %err, "expansion failed");
                    report.failed.push(archive);
                }
            }
        }
    }
    Ok(report)
}
