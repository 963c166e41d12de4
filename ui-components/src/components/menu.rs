//! Menu entries shared by the navbar, sidebar and navigation menu

use crate::config::{ConfigView, scalar_text};
use crate::markup::escape_html;
use serde_json::Value;

/// Keys that may hold an entry's children
const CHILD_KEYS: [&str; 3] = ["submenu", "items", "children"];

/// Badge shown next to a menu label
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBadge {
    /// Badge text
    pub text: String,
    /// Badge variant, looked up in the badge table
    pub variant: String,
}

/// One navigation entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuItem {
    /// Visible label
    pub label: String,
    /// Link target
    pub url: String,
    /// Icon name or markup
    pub icon: Option<String>,
    /// Highlighted as the current page
    pub active: bool,
    /// Optional counter or status badge
    pub badge: Option<MenuBadge>,
    /// Secondary text in dropdown panels
    pub description: Option<String>,
    /// One level of children
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Plain entry
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Builder: icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder: mark active
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Builder: description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: children
    pub fn children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Whether this entry or one of its children is active
    pub fn is_open(&self) -> bool {
        self.active || self.children.iter().any(|c| c.active)
    }

    /// Parse a list of entries. Bare strings and numbers become labels;
    /// other non-object entries are skipped.
    pub fn parse_list(items: &[Value]) -> Vec<MenuItem> {
        items
            .iter()
            .filter_map(|item| Self::parse(item, true))
            .collect()
    }

    fn parse(value: &Value, with_children: bool) -> Option<MenuItem> {
        if let Some(label) = scalar_text(value) {
            return Some(MenuItem::new(label, "#"));
        }
        if !value.is_object() {
            return None;
        }

        let config = ConfigView::new(value);
        let badge = config
            .object("badge")
            .map(|badge| MenuBadge {
                text: badge.string("text", ""),
                variant: badge.string("variant", "default"),
            })
            .or_else(|| {
                // `"badge": "3"` is a common shorthand
                config.opt_string("badge").map(|text| MenuBadge {
                    text,
                    variant: "default".to_string(),
                })
            });

        let children = if with_children {
            config
                .list_any(&CHILD_KEYS)
                .map(|list| list.iter().filter_map(|c| Self::parse(c, false)).collect())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        Some(MenuItem {
            label: config.string_any(&["label", "text", "name"], ""),
            url: config.string_any(&["url", "href"], "#"),
            icon: config.opt_string("icon"),
            active: config.bool("active", false),
            badge,
            description: config.opt_string("description"),
            children,
        })
    }

    /// `class="active"` attribute fragment when active
    pub(crate) fn active_attr(&self) -> &'static str {
        if self.active { r#" class="active""# } else { "" }
    }

    /// Escaped label
    pub(crate) fn label_html(&self) -> String {
        escape_html(&self.label)
    }

    /// Escaped link target
    pub(crate) fn url_attr(&self) -> String {
        escape_html(&self.url)
    }
}
