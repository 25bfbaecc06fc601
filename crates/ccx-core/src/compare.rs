use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{normalize_value, DocKind, MatchStatus};

/// One cross-document comparison for one field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub field: String,
    pub doc_a: DocKind,
    pub value_a: Value,
    pub doc_b: DocKind,
    pub value_b: Value,
    pub status: MatchStatus,
}

impl ComparisonRecord {
    pub fn new(field: &str, doc_a: DocKind, value_a: &Value, doc_b: DocKind, value_b: &Value) -> Self {
        let status = if values_consistent(value_a, value_b) {
            MatchStatus::Match
        } else {
            MatchStatus::Mismatch
        };
        Self {
            field: field.to_string(),
            doc_a,
            value_a: value_a.clone(),
            doc_b,
            value_b: value_b.clone(),
            status,
        }
    }
}

/// Equivalence under normalization rules.
///
/// - A null on either side is vacuously consistent: missing data is never a
///   mismatch.
/// - Two objects compare only the keys present in both; no overlap is
///   vacuously consistent. Supports structured fields like postal addresses
///   where partial overlap is expected.
/// - Anything else compares by equality of normalized forms.
pub fn values_consistent(a: &Value, b: &Value) -> bool {
    if a.is_null() || b.is_null() {
        return true;
    }

    if let (Value::Object(map_a), Value::Object(map_b)) = (a, b) {
        return map_a
            .iter()
            .filter_map(|(key, va)| map_b.get(key).map(|vb| (va, vb)))
            .all(|(va, vb)| normalize_value(va) == normalize_value(vb));
    }

    normalize_value(a) == normalize_value(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_on_either_side_is_consistent() {
        assert!(values_consistent(&Value::Null, &json!("anything")));
        assert!(values_consistent(&json!(7), &Value::Null));
        assert!(values_consistent(&Value::Null, &Value::Null));
    }

    #[test]
    fn symmetric_over_value_pairs() {
        let pairs = [
            (json!("Jane Doe"), json!("jane-doe")),
            (json!("10001"), json!("10002")),
            (json!({"city": "NYC"}), json!({"city": "nyc", "zip": "10001"})),
            (json!(1), json!("1")),
        ];
        for (a, b) in pairs {
            assert_eq!(values_consistent(&a, &b), values_consistent(&b, &a));
        }
    }

    #[test]
    fn normalization_absorbs_formatting() {
        assert!(values_consistent(&json!("New York"), &json!("new-york")));
        assert!(values_consistent(&json!("O'Brien"), &json!("OBRIEN")));
        assert!(!values_consistent(&json!("10001"), &json!("10002")));
    }

    #[test]
    fn objects_compare_shared_keys_only() {
        let a = json!({"city": "New York", "zip": "10001"});
        let b = json!({"city": "new york", "country": "US"});
        assert!(values_consistent(&a, &b));

        let c = json!({"city": "Boston", "country": "US"});
        assert!(!values_consistent(&a, &c));
    }

    #[test]
    fn disjoint_objects_are_vacuously_consistent() {
        let a = json!({"city": "NYC", "zip": "10001"});
        let b = json!({"state": "NY", "country": "US"});
        assert!(values_consistent(&a, &b));
    }

    #[test]
    fn record_carries_status() {
        let rec = ComparisonRecord::new(
            "dob",
            DocKind::Passport,
            &json!("1990-01-01"),
            DocKind::ClientProfile,
            &json!("1990-01-02"),
        );
        assert_eq!(rec.status, MatchStatus::Mismatch);
        assert_eq!(rec.field, "dob");
    }
}
