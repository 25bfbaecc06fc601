use serde_json::Value;

/// Canonical form for comparison: ASCII letters and digits only, lowercased.
/// Strips the formatting noise (spacing, punctuation, casing) that differs
/// across independently authored documents describing the same fact.
pub fn normalize_text(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Textual values are canonicalized; everything else passes through
/// unchanged and is compared by identity.
pub fn normalize_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(normalize_text(s)),
        other => other.clone(),
    }
}
