//! Screener rule keys and result filtering

use serde_json::Value;

/// Serializes the rule names into the cache key used by the screener
/// worker. Identical rule lists map to identical keys; order matters,
/// matching how callers submit them.
pub fn rule_cache_key(rule_names: &[String]) -> String {
    serde_json::to_string(rule_names).unwrap_or_else(|_| "[]".to_string())
}

/// Drops any record containing a null field, checking one nested level.
///
/// A record survives only if every top-level field is non-null and, for
/// fields holding objects or arrays, every immediate child is non-null
/// as well. Deeper nesting is not inspected.
pub fn filter_complete_records(records: Vec<Value>) -> Vec<Value> {
    records
        .into_iter()
        .filter(|record| match record {
            Value::Object(fields) => fields.values().all(is_complete_field),
            _ => false,
        })
        .collect()
}

fn is_complete_field(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(fields) => fields.values().all(|v| !v.is_null()),
        Value::Array(items) => items.iter().all(|v| !v.is_null()),
        _ => true,
    }
}
