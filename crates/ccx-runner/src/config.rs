use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub discovery: DiscoveryConfig,
    pub outputs: OutputTargets,
}

/// Directory-name prefixes that qualify grouping and client directories.
/// An empty prefix matches every directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default)]
    pub grouping_prefix: String,
    #[serde(default)]
    pub client_prefix: String,
}

/// Explicit named output targets, rather than deriving one path from
/// another by suffix rewriting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputTargets {
    pub valid_list: PathBuf,
    pub invalid_list: PathBuf,
    pub summary: PathBuf,
}

impl Config {
    pub fn default_for_root(root: &Path) -> Self {
        Self {
            discovery: DiscoveryConfig {
                grouping_prefix: "datathon_evaluation".to_string(),
                client_prefix: "client_".to_string(),
            },
            outputs: OutputTargets {
                valid_list: root.join("valid_clients.txt"),
                invalid_list: root.join("invalid_clients.txt"),
                summary: root.join("validation_summary.json"),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| "parse ccx.toml")?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
