//! Design tokens
//!
//! Colors, typography, spacing, radii, shadows, breakpoints, daisyUI themes
//! and component defaults, parsed once per process from the bundled JSON.

use serde_json::Value;
use std::sync::OnceLock;

const DESIGN_SYSTEM_JSON: &str = include_str!("../assets/design-system.json");

static DESIGN_SYSTEM: OnceLock<Value> = OnceLock::new();

/// The full token tree
pub fn design_system() -> &'static Value {
    DESIGN_SYSTEM.get_or_init(|| serde_json::from_str(DESIGN_SYSTEM_JSON).unwrap_or_default())
}

/// Token tree as indented JSON, as served by `config://design-system`
pub fn design_system_json() -> String {
    serde_json::to_string_pretty(design_system()).unwrap_or_default()
}

/// Look up a token by dotted path, e.g. `colors.primary.600`
pub fn token(path: &str) -> Option<&'static Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(design_system(), |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Top-level token groups
pub fn sections() -> Vec<&'static str> {
    design_system()
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
