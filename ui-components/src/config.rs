//! Lenient reading of JSON component configuration
//!
//! Configuration arrives from tool calls, usually written by a language model.
//! Nothing here rejects input: absent keys, nulls and wrong-typed values all
//! resolve to the caller's default. Numeric and boolean strings are accepted
//! (`"65"`, `"true"`).

use serde_json::{Map, Value};

/// Borrowed view over one configuration object.
#[derive(Debug, Clone, Copy)]
pub struct ConfigView<'a> {
    value: &'a Value,
}

impl<'a> ConfigView<'a> {
    /// Wrap a JSON value. Non-objects behave like an empty object.
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Raw value for a key. Null counts as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.value.get(key).filter(|v| !v.is_null())
    }

    /// Whether the key is present and non-null
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// String field; numbers and booleans are rendered as text
    pub fn string(&self, key: &str, default: &str) -> String {
        self.get(key)
            .and_then(scalar_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// Optional text field; empty strings count as absent
    pub fn opt_string(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(scalar_text)
            .filter(|s| !s.trim().is_empty())
    }

    /// First non-empty string among several alias keys
    pub fn string_any(&self, keys: &[&str], default: &str) -> String {
        keys.iter()
            .find_map(|key| self.opt_string(key))
            .unwrap_or_else(|| default.to_string())
    }

    /// Boolean field
    pub fn bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(default),
            Some(Value::String(s)) => parse_bool(s).unwrap_or(default),
            _ => default,
        }
    }

    /// Floating point field; non-finite values fall back to the default
    pub fn f64(&self, key: &str, default: f64) -> f64 {
        let parsed = match self.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|f| f.is_finite()).unwrap_or(default)
    }

    /// Non-negative integer field; fractions are truncated
    pub fn usize(&self, key: &str, default: usize) -> usize {
        let value = self.f64(key, f64::NAN);
        if value.is_nan() || value < 0.0 {
            default
        } else {
            value as usize
        }
    }

    /// Array field
    pub fn list(&self, key: &str) -> Option<&'a Vec<Value>> {
        self.get(key).and_then(Value::as_array)
    }

    /// First array found among several alias keys
    pub fn list_any(&self, keys: &[&str]) -> Option<&'a Vec<Value>> {
        keys.iter().find_map(|key| self.list(key))
    }

    /// Array of scalars as strings; other entries are skipped
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        self.list(key)
            .map(|items| items.iter().filter_map(scalar_text).collect())
    }

    /// Nested object field
    pub fn object(&self, key: &str) -> Option<ConfigView<'a>> {
        self.get(key)
            .filter(|v| v.is_object())
            .map(ConfigView::new)
    }

    /// Underlying map, if the value is an object
    pub fn as_map(&self) -> Option<&'a Map<String, Value>> {
        self.value.as_object()
    }

    /// Pick a lookup-table entry by a string field.
    ///
    /// Matching is case-insensitive. Absent or unknown values select the first
    /// entry of the table.
    pub fn choice(&self, key: &str, table: &[(&str, &'static str)]) -> &'static str {
        lookup(table, &self.string(key, ""))
    }
}

/// Look up a key in a fixed table, falling back to the first entry.
pub fn lookup(table: &[(&str, &'static str)], key: &str) -> &'static str {
    let key = key.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .or_else(|| table.first())
        .map(|(_, class)| *class)
        .unwrap_or_default()
}

/// Text form of a scalar JSON value
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Build a value from a lenient configuration view.
///
/// Implementations read every field with an explicit default, so the result of
/// `from_config` on an empty object equals `Default::default()`.
pub trait FromConfig: Default {
    /// Read the configuration
    fn from_config(config: ConfigView<'_>) -> Self;

    /// Read directly from a JSON value
    fn from_value(value: &Value) -> Self {
        Self::from_config(ConfigView::new(value))
    }
}
