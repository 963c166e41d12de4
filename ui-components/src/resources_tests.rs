//! Tests for the static resource catalog

use crate::resources::{CATALOG, TEMPLATE_URI_TEMPLATE, entry, read, template};
use std::collections::HashSet;

#[test]
fn test_catalog_uris_are_unique() {
    let uris: HashSet<_> = CATALOG.iter().map(|entry| entry.uri).collect();
    assert_eq!(uris.len(), CATALOG.len());
    assert_eq!(CATALOG.len(), 11);
}

#[test]
fn test_every_catalog_entry_reads() {
    for listed in &CATALOG {
        let (contents, mime_type) = read(listed.uri).unwrap();
        assert!(!contents.is_empty(), "{} is empty", listed.uri);
        assert_eq!(mime_type, listed.mime_type, "{}", listed.uri);
        assert!(!contents.contains("Template not found"), "{}", listed.uri);
    }
}

#[test]
fn test_docs_are_markdown() {
    let (contents, mime_type) = read("docs://best-practices").unwrap();
    assert_eq!(mime_type, "text/markdown");
    assert!(contents.starts_with("# UI/UX Best Practices for Dashboards"));

    let (rules, _) = read("docs://uiux-design-rules").unwrap();
    assert!(rules.contains("Dashboard Architecture & Layout Logic"));
}

#[test]
fn test_templates() {
    assert!(template("layouts/base").starts_with("<!DOCTYPE html>"));
    assert!(template("components/navbar").contains("<!-- Navbar Component -->"));
    assert!(template("components/stat_card").contains("stats shadow"));
}

#[test]
fn test_unknown_template_path_is_a_comment() {
    assert_eq!(
        template("components/carousel"),
        "<!-- Template not found: components/carousel -->"
    );
    let (contents, mime_type) = read("template://nope").unwrap();
    assert_eq!(contents, "<!-- Template not found: nope -->");
    assert_eq!(mime_type, "text/html");
}

#[test]
fn test_unknown_uri() {
    assert!(read("docs://missing").is_none());
    assert!(read("file:///etc/passwd").is_none());
    assert!(entry("docs://missing").is_none());
}

#[test]
fn test_entry_lookup() {
    let found = entry("config://design-system").unwrap();
    assert_eq!(found.mime_type, "application/json");
    assert_eq!(found.name, "Design System Configuration");
    assert!(TEMPLATE_URI_TEMPLATE.starts_with("template://"));
}
