use serde::{Deserialize, Serialize};

use crate::ComparisonRecord;

/// The fixed vocabulary of per-client documents. Declaration order is load
/// order, and `Ord` follows it, so anything keyed by `DocKind` enumerates
/// pairs deterministically.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    Passport,
    ClientProfile,
    AccountForm,
}

impl DocKind {
    pub const ALL: [DocKind; 3] = [DocKind::Passport, DocKind::ClientProfile, DocKind::AccountForm];

    pub fn file_name(&self) -> &'static str {
        match self {
            DocKind::Passport => "passport.json",
            DocKind::ClientProfile => "client_profile.json",
            DocKind::AccountForm => "account_form.json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::Passport => "passport",
            DocKind::ClientProfile => "client_profile",
            DocKind::AccountForm => "account_form",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Match,
    Mismatch,
}

/// Per-client validity determination, emitted once after all comparisons.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientVerdict {
    pub client_id: String,
    pub valid: bool,
    pub grouping: String,
    pub path: String,
    pub fields_validated: usize,
    pub document_types: Vec<DocKind>,
}

/// Verdict plus the full comparison trail that produced it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientReport {
    pub verdict: ClientVerdict,
    pub records: Vec<ComparisonRecord>,
}

impl ClientReport {
    pub fn mismatches(&self) -> impl Iterator<Item = &ComparisonRecord> {
        self.records.iter().filter(|r| r.status == MatchStatus::Mismatch)
    }
}

pub fn mismatch_free(records: &[ComparisonRecord]) -> bool {
    records.iter().all(|r| r.status == MatchStatus::Match)
}
