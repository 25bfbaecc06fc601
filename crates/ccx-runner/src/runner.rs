use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use ccx_core::ClientVerdict;
use ccx_validate::validate_client;

use crate::{find_client_dirs, write_reports, Config};

/// Aggregate outcome of one validation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub clients_found: usize,
    pub verdicts: usize,
    pub valid: usize,
    pub invalid: usize,
    pub skipped: usize,
}

pub struct Runner {
    pub root: PathBuf,
    pub cfg: Config,
}

impl Runner {
    pub fn new(root: PathBuf, cfg: Config) -> Self {
        Self { root, cfg }
    }

    /// Validates every discovered client sequentially and writes the
    /// configured reports. Per-client failures never abort the batch; only
    /// failing to enumerate the root does.
    pub fn run(&self) -> Result<BatchSummary> {
        let clients = find_client_dirs(&self.root, &self.cfg.discovery)?;
        info!(count = clients.len(), "found client directories");

        let mut verdicts: Vec<ClientVerdict> = Vec::new();
        let mut skipped = 0usize;
        for client in &clients {
            match validate_client(&client.path) {
                Some(report) => {
                    print_client(&report);
                    verdicts.push(report.verdict);
                }
                None => skipped += 1,
            }
        }

        // Directory enumeration order is not stable across filesystems;
        // sort so reports are deterministic.
        verdicts.sort_by(|a, b| a.client_id.cmp(&b.client_id));
        write_reports(&self.cfg.outputs, &verdicts)?;

        let valid = verdicts.iter().filter(|v| v.valid).count();
        Ok(BatchSummary {
            clients_found: clients.len(),
            verdicts: verdicts.len(),
            valid,
            invalid: verdicts.len() - valid,
            skipped,
        })
    }
}

fn print_client(report: &ccx_core::ClientReport) {
    let v = &report.verdict;
    println!("Validating client {}: {} fields compared", v.client_id, v.fields_validated);
    for rec in report.mismatches() {
        println!("  MISMATCH in field '{}':", rec.field);
        println!("    {}: {}", rec.doc_a.as_str(), rec.value_a);
        println!("    {}: {}", rec.doc_b.as_str(), rec.value_b);
    }
    if v.valid {
        println!("  all matching fields are consistent");
    }
}

/// Convenience wrapper used by the CLI.
pub fn run_validation(root: &Path, cfg: Config) -> Result<BatchSummary> {
    Runner::new(root.to_path_buf(), cfg).run()
}
