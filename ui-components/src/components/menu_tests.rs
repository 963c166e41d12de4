//! Tests for menu entry parsing

use crate::components::{MenuBadge, MenuItem};
use serde_json::json;

#[test]
fn test_scalars_become_labels() {
    let items = MenuItem::parse_list(json!(["Home", 42, null, ["nested"]]).as_array().unwrap());
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], MenuItem::new("Home", "#"));
    assert_eq!(items[1].label, "42");
}

#[test]
fn test_object_fields_and_aliases() {
    let items = MenuItem::parse_list(
        json!([
            {"label": "Reports", "url": "/reports", "icon": "file", "active": true},
            {"text": "Help", "href": "/help", "description": "Get support"},
            {"name": "Team"}
        ])
        .as_array()
        .unwrap(),
    );

    assert_eq!(items[0].url, "/reports");
    assert_eq!(items[0].icon.as_deref(), Some("file"));
    assert!(items[0].active);
    assert_eq!(items[1].label, "Help");
    assert_eq!(items[1].url, "/help");
    assert_eq!(items[1].description.as_deref(), Some("Get support"));
    assert_eq!(items[2].label, "Team");
    assert_eq!(items[2].url, "#");
}

#[test]
fn test_badge_object_and_shorthand() {
    let items = MenuItem::parse_list(
        json!([
            {"label": "Inbox", "badge": {"text": "12", "variant": "success"}},
            {"label": "Alerts", "badge": 3}
        ])
        .as_array()
        .unwrap(),
    );

    assert_eq!(
        items[0].badge,
        Some(MenuBadge {
            text: "12".to_string(),
            variant: "success".to_string()
        })
    );
    assert_eq!(
        items[1].badge,
        Some(MenuBadge {
            text: "3".to_string(),
            variant: "default".to_string()
        })
    );
}

#[test]
fn test_children_from_any_alias_one_level_deep() {
    let items = MenuItem::parse_list(
        json!([
            {"label": "A", "submenu": [{"label": "A1", "children": [{"label": "deep"}]}]},
            {"label": "B", "items": ["B1", "B2"]},
            {"label": "C", "children": [{"label": "C1", "active": true}]}
        ])
        .as_array()
        .unwrap(),
    );

    assert_eq!(items[0].children.len(), 1);
    assert!(items[0].children[0].children.is_empty());
    assert_eq!(items[1].children.len(), 2);
    assert_eq!(items[1].children[1].label, "B2");
    assert!(!items[2].active);
    assert!(items[2].is_open());
    assert!(!items[1].is_open());
}

#[test]
fn test_builders() {
    let item = MenuItem::new("Docs", "/docs")
        .icon("book")
        .active()
        .description("Read the guides")
        .children(vec![MenuItem::new("API", "/docs/api")]);

    assert_eq!(item.icon.as_deref(), Some("book"));
    assert!(item.active);
    assert_eq!(item.description.as_deref(), Some("Read the guides"));
    assert_eq!(item.children.len(), 1);
}

#[test]
fn test_attribute_helpers_escape() {
    let item = MenuItem::new("R&D", "/search?q=\"x\"");
    assert_eq!(item.label_html(), "R&amp;D");
    assert_eq!(item.url_attr(), "/search?q=&quot;x&quot;");
    assert_eq!(item.active_attr(), "");
    assert_eq!(item.active().active_attr(), " class=\"active\"");
}
