use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use ccx_core::ClientVerdict;

use crate::OutputTargets;

/// JSON summary document written next to the id lists.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub total_clients: usize,
    pub valid_clients: usize,
    pub invalid_clients: usize,
    pub valid_per_grouping: BTreeMap<String, usize>,
    pub verdicts: &'a [ClientVerdict],
}

pub fn valid_per_grouping(verdicts: &[ClientVerdict]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for v in verdicts.iter().filter(|v| v.valid) {
        *counts.entry(v.grouping.clone()).or_insert(0) += 1;
    }
    counts
}

fn write_id_list<'a>(path: &Path, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut file =
        std::fs::File::create(path).with_context(|| format!("write {}", path.display()))?;
    for id in ids {
        writeln!(file, "{id}").with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

/// Writes the valid-client list, the invalid-client list, and the JSON
/// summary to their configured targets. Expects verdicts already sorted.
pub fn write_reports(outputs: &OutputTargets, verdicts: &[ClientVerdict]) -> Result<()> {
    write_id_list(
        &outputs.valid_list,
        verdicts.iter().filter(|v| v.valid).map(|v| v.client_id.as_str()),
    )?;
    write_id_list(
        &outputs.invalid_list,
        verdicts.iter().filter(|v| !v.valid).map(|v| v.client_id.as_str()),
    )?;

    let valid = verdicts.iter().filter(|v| v.valid).count();
    let summary = Summary {
        total_clients: verdicts.len(),
        valid_clients: valid,
        invalid_clients: verdicts.len() - valid,
        valid_per_grouping: valid_per_grouping(verdicts),
        verdicts,
    };
    let body = serde_json::to_string_pretty(&summary).context("serialize summary")?;
    std::fs::write(&outputs.summary, body)
        .with_context(|| format!("write {}", outputs.summary.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccx_core::DocKind;

    fn verdict(id: &str, grouping: &str, valid: bool) -> ClientVerdict {
        ClientVerdict {
            client_id: id.to_string(),
            valid,
            grouping: grouping.to_string(),
            path: format!("/data/{grouping}/{id}"),
            fields_validated: 2,
            document_types: vec![DocKind::Passport, DocKind::ClientProfile],
        }
    }

    #[test]
    fn writes_lists_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = OutputTargets {
            valid_list: dir.path().join("valid.txt"),
            invalid_list: dir.path().join("invalid.txt"),
            summary: dir.path().join("summary.json"),
        };
        let verdicts = vec![
            verdict("client_a", "part_1", true),
            verdict("client_b", "part_1", false),
            verdict("client_c", "part_2", true),
        ];
        write_reports(&outputs, &verdicts).unwrap();

        let valid = std::fs::read_to_string(&outputs.valid_list).unwrap();
        assert_eq!(valid, "client_a\nclient_c\n");
        let invalid = std::fs::read_to_string(&outputs.invalid_list).unwrap();
        assert_eq!(invalid, "client_b\n");

        let summary: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&outputs.summary).unwrap()).unwrap();
        assert_eq!(summary["total_clients"], 3);
        assert_eq!(summary["valid_per_grouping"]["part_1"], 1);
        assert_eq!(summary["valid_per_grouping"]["part_2"], 1);
        assert_eq!(summary["verdicts"][1]["client_id"], "client_b");
    }

    #[test]
    fn grouping_counts_ignore_invalid_clients() {
        let verdicts =
            vec![verdict("a", "p1", false), verdict("b", "p1", false), verdict("c", "p2", true)];
        let counts = valid_per_grouping(&verdicts);
        assert_eq!(counts.get("p1"), None);
        assert_eq!(counts.get("p2"), Some(&1));
    }
}
