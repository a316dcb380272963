//! Generic key/value rendering for an arbitrary record.

use serde::Serialize;
use serde_json::Value;

use crate::record::Record;

pub const NOT_AVAILABLE: &str = "Not available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// Rows for every visible field, in record order. Keys starting with `_` are
/// internal and hidden.
pub fn detail_rows(record: &Record) -> Vec<DetailRow> {
    record
        .fields()
        .filter(|(key, _)| !key.starts_with('_'))
        .map(|(key, value)| DetailRow {
            label: format_label(key),
            value: format_value(value),
        })
        .collect()
}

/// `clinic_id` -> `Clinic Id`, `branchName` -> `Branch Name`,
/// `Clinic ID` -> `Clinic ID`.
pub fn format_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_uppercase() && prev.is_some_and(char::is_lowercase) {
            spaced.push(' ');
        }
        spaced.push(ch);
        prev = Some(ch);
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(text) if text.is_empty() => NOT_AVAILABLE.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Value::Number(_) | Value::Bool(_) => value.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/detail_tests.rs"]
mod tests;
