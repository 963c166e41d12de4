//! Static resources: page templates, design tokens and guideline documents

use crate::design_system::design_system_json;
use crate::markup::escape_comment;

/// One entry of the resource catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Resource URI
    pub uri: &'static str,
    /// Display name
    pub name: &'static str,
    /// MIME type of the contents
    pub mime_type: &'static str,
    /// Short description
    pub description: &'static str,
}

const HTML: &str = "text/html";
const MARKDOWN: &str = "text/markdown";
const JSON: &str = "application/json";

/// URI scheme prefix of template resources
pub const TEMPLATE_SCHEME: &str = "template://";

/// URI template covering every template path
pub const TEMPLATE_URI_TEMPLATE: &str = "template://{path}";

/// Every listed resource
pub const CATALOG: [ResourceEntry; 11] = [
    ResourceEntry {
        uri: "template://components/stat_card",
        name: "Stat Card Component",
        mime_type: HTML,
        description: "Reusable stat card template for displaying metrics",
    },
    ResourceEntry {
        uri: "template://components/chart_container",
        name: "Chart Container Component",
        mime_type: HTML,
        description: "Container for Chart.js charts with responsive sizing",
    },
    ResourceEntry {
        uri: "template://components/sidebar",
        name: "Sidebar Navigation Component",
        mime_type: HTML,
        description: "Responsive sidebar navigation menu",
    },
    ResourceEntry {
        uri: "template://components/navbar",
        name: "Top Navigation Component",
        mime_type: HTML,
        description: "Top navigation bar with logo and menu",
    },
    ResourceEntry {
        uri: "template://layouts/base",
        name: "Base Layout Template",
        mime_type: HTML,
        description: "Base Flask template with DaisyUI setup",
    },
    ResourceEntry {
        uri: "config://design-system",
        name: "Design System Configuration",
        mime_type: JSON,
        description: "Color palette, typography, spacing, and component styles",
    },
    ResourceEntry {
        uri: "docs://best-practices",
        name: "UI Best Practices Guide",
        mime_type: MARKDOWN,
        description: "Guidelines for creating beautiful, accessible dashboards",
    },
    ResourceEntry {
        uri: "docs://uiux-design-rules",
        name: "UI/UX Design Rules & Standards",
        mime_type: MARKDOWN,
        description: "Comprehensive UI/UX design rules, constraints, and anti-patterns from expert sources",
    },
    ResourceEntry {
        uri: "docs://dashboard-architecture",
        name: "Dashboard Architecture Guide",
        mime_type: MARKDOWN,
        description: "Navigation models, information density, and layout logic for dashboards",
    },
    ResourceEntry {
        uri: "docs://visual-style-system",
        name: "Visual Style System",
        mime_type: MARKDOWN,
        description: "Typography, spacing, color, and visual polish guidelines",
    },
    ResourceEntry {
        uri: "docs://anti-patterns",
        name: "UI Anti-Patterns to Avoid",
        mime_type: MARKDOWN,
        description: "Common UI/UX mistakes and how to avoid them",
    },
];

/// Contents and MIME type of a resource, `None` for URIs outside the catalog.
///
/// Every `template://` URI resolves: unknown template paths return a comment
/// naming the path.
pub fn read(uri: &str) -> Option<(String, &'static str)> {
    if let Some(path) = uri.strip_prefix(TEMPLATE_SCHEME) {
        return Some((template(path), HTML));
    }
    let contents = match uri {
        "config://design-system" => return Some((design_system_json(), JSON)),
        "docs://best-practices" => include_str!("../assets/docs/best-practices.md"),
        "docs://uiux-design-rules" => include_str!("../assets/docs/uiux-design-rules.md"),
        "docs://dashboard-architecture" => {
            include_str!("../assets/docs/dashboard-architecture.md")
        }
        "docs://visual-style-system" => include_str!("../assets/docs/visual-style-system.md"),
        "docs://anti-patterns" => include_str!("../assets/docs/anti-patterns.md"),
        _ => return None,
    };
    Some((contents.to_string(), MARKDOWN))
}

/// Template source by path such as `components/navbar`
pub fn template(path: &str) -> String {
    let source = match path {
        "layouts/base" => include_str!("../assets/templates/base.html"),
        "components/stat_card" => include_str!("../assets/templates/components/stat_card.html"),
        "components/chart_container" => {
            include_str!("../assets/templates/components/chart_container.html")
        }
        "components/sidebar" => include_str!("../assets/templates/components/sidebar.html"),
        "components/navbar" => include_str!("../assets/templates/components/navbar.html"),
        _ => return format!("<!-- Template not found: {} -->", escape_comment(path)),
    };
    source.to_string()
}

/// Catalog entry for a URI
pub fn entry(uri: &str) -> Option<&'static ResourceEntry> {
    CATALOG.iter().find(|entry| entry.uri == uri)
}
