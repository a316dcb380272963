use serde_json::Value;

use crate::record::scalar_text;

/// Provider references as a de-duplicated list of trimmed ids, in first-seen
/// order. Accepts an array of ids, a single id or a comma-separated string.
pub fn provider_id_list(value: &Value) -> Vec<String> {
    let raw: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        Value::String(text) => text.split(',').map(str::to_string).collect(),
        other => scalar_text(other).into_iter().collect(),
    };

    let mut ids: Vec<String> = Vec::with_capacity(raw.len());
    for id in raw {
        let id = id.trim();
        if id.is_empty() || ids.iter().any(|seen| seen == id) {
            continue;
        }
        ids.push(id.to_string());
    }
    ids
}

/// Comma-joined form sent as the `ids` query parameter; `None` means there
/// is nothing to fetch.
pub fn normalize_provider_ids(value: &Value) -> Option<String> {
    let ids = provider_id_list(value);
    (!ids.is_empty()).then(|| ids.join(","))
}

#[cfg(test)]
#[path = "tests/providers_tests.rs"]
mod tests;
