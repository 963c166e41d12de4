//! Helpers shared by the unit tests

use std::collections::HashSet;

/// Values of `id` attributes that occur more than once in `html`
pub(crate) fn duplicate_ids(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for (pos, _) in html.match_indices(" id=\"") {
        let rest = &html[pos + 5..];
        let Some(end) = rest.find('"') else { continue };
        let id = &rest[..end];
        if !seen.insert(id) {
            duplicates.push(id.to_string());
        }
    }
    duplicates
}

/// Number of `id` attributes in `html`
pub(crate) fn id_count(html: &str) -> usize {
    html.matches(" id=\"").count()
}
