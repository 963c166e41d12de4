//! Navigation components: navbar, sidebar, navigation menu, breadcrumb and
//! dropdown menu

use super::theme::ThemeToggle;
use super::{BADGE_VARIANTS, BUTTON_VARIANTS, Component, MenuItem};
use crate::config::{ConfigView, FromConfig, lookup, scalar_text};
use crate::ids::IdGenerator;
use crate::markup::{escape_html, icon, indent, opt_icon, script_json};
use serde_json::Value;

fn menu_list(config: &ConfigView<'_>, key: &str, defaults: Vec<MenuItem>) -> Vec<MenuItem> {
    config
        .list(key)
        .map(|items| MenuItem::parse_list(items))
        .unwrap_or(defaults)
}

fn badge_html(item: &MenuItem) -> String {
    item.badge
        .as_ref()
        .filter(|b| !b.text.is_empty())
        .map(|b| {
            format!(
                "<span class=\"badge badge-sm {}\">{}</span>",
                lookup(&BADGE_VARIANTS, &b.variant),
                escape_html(&b.text)
            )
        })
        .unwrap_or_default()
}

/// Top navigation bar
#[derive(Debug, Clone, PartialEq)]
pub struct Navbar {
    /// Brand label
    pub brand: String,
    /// Brand icon
    pub brand_icon: Option<String>,
    /// Menu entries; entries with children become dropdowns
    pub items: Vec<MenuItem>,
    /// Append a theme toggle
    pub theme_toggle: bool,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            brand: "Brand".to_string(),
            brand_icon: None,
            items: ["Home", "About", "Contact"]
                .into_iter()
                .map(|label| MenuItem::new(label, "#"))
                .collect(),
            theme_toggle: false,
        }
    }
}

impl FromConfig for Navbar {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            brand: config.string("brand", &defaults.brand),
            brand_icon: config.opt_string("brand_icon"),
            items: menu_list(&config, "items", defaults.items),
            theme_toggle: config.bool("theme_toggle", false),
        }
    }
}

impl Component for Navbar {
    fn render(&self, ids: &mut dyn IdGenerator) -> String {
        let mut entries = String::new();
        for item in &self.items {
            let label = format!(
                "{}{}",
                opt_icon(item.icon.as_deref(), "w-4 h-4"),
                item.label_html()
            );
            if item.children.is_empty() {
                entries.push_str(&format!(
                    "      <li><a href=\"{}\"{}>{label}{}</a></li>\n",
                    item.url_attr(),
                    item.active_attr(),
                    badge_html(item)
                ));
            } else {
                entries.push_str(&format!(
                    "      <li>\n        <details>\n          <summary>{label}</summary>\n          <ul class=\"z-20 w-48 rounded-t-none bg-base-100 p-2 shadow\">\n"
                ));
                for child in &item.children {
                    entries.push_str(&format!(
                        "            <li><a href=\"{}\"{}>{}{}</a></li>\n",
                        child.url_attr(),
                        child.active_attr(),
                        opt_icon(child.icon.as_deref(), "w-4 h-4"),
                        child.label_html()
                    ));
                }
                entries.push_str("          </ul>\n        </details>\n      </li>\n");
            }
        }

        let toggle = if self.theme_toggle {
            format!("\n{}", indent(&ThemeToggle::default().render(ids), 4))
        } else {
            String::new()
        };

        format!(
            r#"<div class="navbar bg-base-100 border-b border-base-300 shadow-sm">
  <div class="flex-1">
    <a href="/" class="btn btn-ghost text-xl">{brand_icon}{brand}</a>
  </div>
  <div class="flex-none gap-2">
    <ul class="menu menu-horizontal px-1">
{entries}    </ul>{toggle}
  </div>
</div>
"#,
            brand_icon = opt_icon(self.brand_icon.as_deref(), "w-6 h-6"),
            brand = escape_html(&self.brand),
        )
    }
}

/// Side navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    /// Brand label
    pub brand: String,
    /// Brand icon
    pub brand_icon: Option<String>,
    /// Add a collapse button
    pub collapsible: bool,
    /// Menu entries; entries with children become collapsible groups
    pub items: Vec<MenuItem>,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            brand: "Dashboard".to_string(),
            brand_icon: None,
            collapsible: false,
            items: vec![
                MenuItem::new("Dashboard", "/dashboard")
                    .icon("layout-dashboard")
                    .active(),
                MenuItem::new("Analytics", "/analytics").icon("bar-chart"),
                MenuItem::new("Settings", "/settings").icon("settings"),
            ],
        }
    }
}

impl FromConfig for Sidebar {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            brand: config.string("brand", &defaults.brand),
            brand_icon: config.opt_string("brand_icon"),
            collapsible: config.bool("collapsible", false),
            items: menu_list(&config, "items", defaults.items),
        }
    }
}

impl Component for Sidebar {
    fn render(&self, ids: &mut dyn IdGenerator) -> String {
        let id = ids.next_id("sidebar");
        let mut entries = String::new();
        for item in &self.items {
            let label = format!(
                "{}<span class=\"kd-sidebar-label\">{}</span>",
                opt_icon(item.icon.as_deref(), "w-5 h-5"),
                item.label_html()
            );
            if item.children.is_empty() {
                entries.push_str(&format!(
                    "    <li><a href=\"{}\"{}>{label}{}</a></li>\n",
                    item.url_attr(),
                    item.active_attr(),
                    badge_html(item)
                ));
                continue;
            }

            let open = if item.is_open() { " open" } else { "" };
            entries.push_str(&format!(
                "    <li>\n      <details{open}>\n        <summary>{label}{}</summary>\n        <ul>\n",
                badge_html(item)
            ));
            for child in &item.children {
                entries.push_str(&format!(
                    "          <li><a href=\"{}\"{}>{}{}{}</a></li>\n",
                    child.url_attr(),
                    child.active_attr(),
                    opt_icon(child.icon.as_deref(), "w-4 h-4"),
                    child.label_html(),
                    badge_html(child)
                ));
            }
            entries.push_str("        </ul>\n      </details>\n    </li>\n");
        }

        let (toggle, script) = if self.collapsible {
            (
                format!(
                    "\n    <button type=\"button\" class=\"btn btn-ghost btn-sm btn-square\" aria-label=\"Toggle sidebar\" data-sidebar-toggle>{}</button>",
                    icon("chevrons-left", "w-4 h-4")
                ),
                format!(
                    r#"<script>
  (function () {{
    var sidebar = document.getElementById({id_js});
    if (!sidebar) {{ return; }}
    var toggle = sidebar.querySelector('[data-sidebar-toggle]');
    toggle.addEventListener('click', function () {{
      var collapsed = sidebar.getAttribute('data-collapsed') !== 'true';
      sidebar.setAttribute('data-collapsed', String(collapsed));
      sidebar.classList.toggle('w-64', !collapsed);
      sidebar.classList.toggle('w-20', collapsed);
      sidebar.querySelectorAll('.kd-sidebar-label').forEach(function (label) {{
        label.classList.toggle('hidden', collapsed);
      }});
    }});
  }})();
</script>
"#,
                    id_js = script_json(&id)
                ),
            )
        } else {
            (String::new(), String::new())
        };

        format!(
            r#"<aside id="{id}" class="kd-sidebar flex min-h-full w-64 flex-col bg-base-200 text-base-content transition-all" data-collapsed="false">
  <div class="flex items-center justify-between border-b border-base-300 p-4">
    <a href="/" class="flex items-center gap-2 text-lg font-semibold">{brand_icon}<span class="kd-sidebar-label">{brand}</span></a>{toggle}
  </div>
  <ul class="menu flex-1 gap-1 p-4">
{entries}  </ul>
</aside>
{script}"#,
            brand_icon = opt_icon(self.brand_icon.as_deref(), "w-6 h-6"),
            brand = escape_html(&self.brand),
        )
    }
}

/// Horizontal menu with described dropdown panels
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationMenu {
    /// Brand label; omitted when absent
    pub brand: Option<String>,
    /// Brand icon
    pub brand_icon: Option<String>,
    /// Render entry icons
    pub show_icons: bool,
    /// Menu entries
    pub items: Vec<MenuItem>,
}

impl Default for NavigationMenu {
    fn default() -> Self {
        Self {
            brand: None,
            brand_icon: None,
            show_icons: true,
            items: vec![
                MenuItem::new("Home", "/").icon("home").active(),
                MenuItem::new("Products", "#")
                    .icon("shopping-bag")
                    .children(vec![
                        MenuItem::new("All Products", "/products")
                            .icon("package")
                            .description("Browse the complete catalog"),
                        MenuItem::new("New Arrivals", "/products/new")
                            .icon("sparkles")
                            .description("See what just landed"),
                    ]),
                MenuItem::new("Docs", "/docs").icon("book-open"),
                MenuItem::new("About", "/about").icon("info"),
            ],
        }
    }
}

impl FromConfig for NavigationMenu {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            brand: config.opt_string("brand"),
            brand_icon: config.opt_string("brand_icon"),
            show_icons: config.bool("show_icons", true),
            items: menu_list(&config, "items", defaults.items),
        }
    }
}

impl Component for NavigationMenu {
    fn render(&self, ids: &mut dyn IdGenerator) -> String {
        let id = ids.next_id("navmenu");
        let item_icon = |item: &MenuItem, class: &str| {
            if self.show_icons {
                opt_icon(item.icon.as_deref(), class)
            } else {
                String::new()
            }
        };

        let brand = self
            .brand
            .as_deref()
            .map(|brand| {
                format!(
                    "  <div class=\"mr-4 flex-none\">\n    <a href=\"/\" class=\"flex items-center gap-2 text-lg font-semibold\">{}{}</a>\n  </div>\n",
                    opt_icon(self.brand_icon.as_deref(), "w-6 h-6"),
                    escape_html(brand)
                )
            })
            .unwrap_or_default();

        let mut entries = String::new();
        for item in &self.items {
            if item.children.is_empty() {
                entries.push_str(&format!(
                    "    <li><a href=\"{}\"{}>{}{}{}</a></li>\n",
                    item.url_attr(),
                    item.active_attr(),
                    item_icon(item, "w-4 h-4"),
                    item.label_html(),
                    badge_html(item)
                ));
                continue;
            }

            let active = if item.is_open() { " active" } else { "" };
            entries.push_str(&format!(
                r#"    <li class="dropdown dropdown-hover">
      <div tabindex="0" role="button" class="flex items-center gap-2{active}">{}{}{}</div>
      <ul tabindex="0" class="dropdown-content z-20 grid w-96 gap-1 rounded-box border border-base-300 bg-base-100 p-3 shadow-lg">
"#,
                item_icon(item, "w-4 h-4"),
                item.label_html(),
                icon("chevron-down", "w-4 h-4 opacity-60"),
            ));
            for child in &item.children {
                let description = child
                    .description
                    .as_deref()
                    .map(|d| {
                        format!(
                            "<p class=\"text-sm text-base-content/70\">{}</p>",
                            escape_html(d)
                        )
                    })
                    .unwrap_or_default();
                entries.push_str(&format!(
                    "        <li><a href=\"{}\" class=\"flex items-start gap-3{}\">{}<div><div class=\"font-medium\">{}</div>{description}</div></a></li>\n",
                    child.url_attr(),
                    if child.active { " active" } else { "" },
                    item_icon(child, "w-5 h-5 mt-0.5"),
                    child.label_html(),
                ));
            }
            entries.push_str("      </ul>\n    </li>\n");
        }

        format!(
            r#"<nav id="{id}" class="navbar border-b border-base-300 bg-base-100 px-4" aria-label="Main">
{brand}  <ul class="menu menu-horizontal flex-1 gap-1">
{entries}  </ul>
</nav>
"#
        )
    }
}

/// One breadcrumb step
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    /// Label
    pub label: String,
    /// Link; the step renders as plain text without one
    pub url: Option<String>,
    /// Icon name or markup
    pub icon: Option<String>,
}

/// Breadcrumb trail
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    /// Steps from root to current page
    pub items: Vec<Crumb>,
}

impl Default for Breadcrumb {
    fn default() -> Self {
        let crumb = |label: &str, url: Option<&str>| Crumb {
            label: label.to_string(),
            url: url.map(String::from),
            icon: None,
        };
        Self {
            items: vec![
                crumb("Home", Some("/")),
                crumb("Documents", Some("/documents")),
                crumb("Current Page", None),
            ],
        }
    }
}

impl FromConfig for Breadcrumb {
    fn from_config(config: ConfigView<'_>) -> Self {
        let items = match config.list("items") {
            Some(items) => items
                .iter()
                .filter_map(|item| {
                    if let Some(label) = scalar_text(item) {
                        return Some(Crumb {
                            label,
                            url: None,
                            icon: None,
                        });
                    }
                    item.is_object().then(|| {
                        let crumb = ConfigView::new(item);
                        Crumb {
                            label: crumb.string_any(&["label", "text"], ""),
                            url: crumb.opt_string("url"),
                            icon: crumb.opt_string("icon"),
                        }
                    })
                })
                .collect(),
            None => return Self::default(),
        };
        Self { items }
    }
}

impl Component for Breadcrumb {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let mut html = String::from("<div class=\"breadcrumbs text-sm\">\n  <ul>\n");
        for crumb in &self.items {
            let label = format!(
                "{}{}",
                opt_icon(crumb.icon.as_deref(), "w-4 h-4 mr-1"),
                escape_html(&crumb.label)
            );
            match &crumb.url {
                Some(url) => html.push_str(&format!(
                    "    <li><a href=\"{}\">{label}</a></li>\n",
                    escape_html(url)
                )),
                None => html.push_str(&format!(
                    "    <li><span aria-current=\"page\">{label}</span></li>\n"
                )),
            }
        }
        html.push_str("  </ul>\n</div>\n");
        html
    }
}

/// Dropdown menu entry
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEntry {
    /// Non-interactive heading
    Label(String),
    /// Divider line
    Separator,
    /// Clickable item
    Item {
        /// Item text
        text: String,
        /// Icon name or markup
        icon: Option<String>,
        /// Keyboard shortcut hint
        shortcut: Option<String>,
        /// Link target
        url: String,
        /// Render in the destructive color
        destructive: bool,
        /// Render disabled
        disabled: bool,
    },
}

impl DropdownEntry {
    fn item(text: &str, icon: &str, shortcut: Option<&str>) -> Self {
        DropdownEntry::Item {
            text: text.to_string(),
            icon: Some(icon.to_string()),
            shortcut: shortcut.map(String::from),
            url: "#".to_string(),
            destructive: false,
            disabled: false,
        }
    }

    fn parse(value: &Value) -> Option<Self> {
        if let Some(text) = scalar_text(value) {
            return Some(if text.trim() == "-" {
                DropdownEntry::Separator
            } else {
                DropdownEntry::Item {
                    text,
                    icon: None,
                    shortcut: None,
                    url: "#".to_string(),
                    destructive: false,
                    disabled: false,
                }
            });
        }
        if !value.is_object() {
            return None;
        }
        let entry = ConfigView::new(value);
        let text = entry.string_any(&["text", "label"], "");
        Some(match entry.string("type", "item").to_ascii_lowercase().as_str() {
            "separator" | "divider" => DropdownEntry::Separator,
            "label" => DropdownEntry::Label(text),
            _ => DropdownEntry::Item {
                text,
                icon: entry.opt_string("icon"),
                shortcut: entry.opt_string("shortcut"),
                url: entry.string("url", "#"),
                destructive: entry.string("variant", "default").eq_ignore_ascii_case("destructive"),
                disabled: entry.bool("disabled", false),
            },
        })
    }
}

const DROPDOWN_POSITIONS: [(&str, &str); 6] = [
    ("bottom-end", "dropdown-bottom dropdown-end"),
    ("bottom-start", "dropdown-bottom"),
    ("top-end", "dropdown-top dropdown-end"),
    ("top-start", "dropdown-top"),
    ("left", "dropdown-left"),
    ("right", "dropdown-right"),
];

/// Dropdown menu
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownMenu {
    /// Trigger label
    pub trigger_text: String,
    /// Trigger icon
    pub trigger_icon: Option<String>,
    /// Trigger button variant
    pub trigger_variant: String,
    /// Placement relative to the trigger
    pub position: String,
    /// Entries in display order
    pub items: Vec<DropdownEntry>,
}

impl Default for DropdownMenu {
    fn default() -> Self {
        Self {
            trigger_text: "Options".to_string(),
            trigger_icon: None,
            trigger_variant: "outline".to_string(),
            position: "bottom-end".to_string(),
            items: vec![
                DropdownEntry::Label("My Account".to_string()),
                DropdownEntry::Separator,
                DropdownEntry::item("Profile", "user", Some("⇧⌘P")),
                DropdownEntry::item("Settings", "settings", Some("⌘S")),
                DropdownEntry::Separator,
                DropdownEntry::Item {
                    text: "Log out".to_string(),
                    icon: Some("log-out".to_string()),
                    shortcut: None,
                    url: "#".to_string(),
                    destructive: true,
                    disabled: false,
                },
            ],
        }
    }
}

impl FromConfig for DropdownMenu {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            trigger_text: config.string("trigger_text", &defaults.trigger_text),
            trigger_icon: config.opt_string("trigger_icon"),
            trigger_variant: config.string("trigger_variant", &defaults.trigger_variant),
            position: config.string("position", &defaults.position),
            items: config
                .list("items")
                .map(|items| items.iter().filter_map(DropdownEntry::parse).collect())
                .unwrap_or(defaults.items),
        }
    }
}

impl Component for DropdownMenu {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let mut entries = String::new();
        for entry in &self.items {
            match entry {
                DropdownEntry::Label(text) => entries.push_str(&format!(
                    "    <li class=\"menu-title\">{}</li>\n",
                    escape_html(text)
                )),
                DropdownEntry::Separator => entries.push_str(
                    "    <li class=\"my-1 border-t border-base-300\" role=\"separator\"></li>\n",
                ),
                DropdownEntry::Item {
                    text,
                    icon,
                    shortcut,
                    url,
                    destructive,
                    disabled,
                } => {
                    let shortcut = shortcut
                        .as_deref()
                        .map(|s| format!("<kbd class=\"kbd kbd-xs\">{}</kbd>", escape_html(s)))
                        .unwrap_or_default();
                    let class = if *destructive { " text-error" } else { "" };
                    let inner = format!(
                        "<span class=\"flex items-center gap-2\">{}{}</span>{shortcut}",
                        opt_icon(icon.as_deref(), "w-4 h-4"),
                        escape_html(text)
                    );
                    if *disabled {
                        entries.push_str(&format!(
                            "    <li class=\"disabled\"><a class=\"flex justify-between{class}\" aria-disabled=\"true\">{inner}</a></li>\n"
                        ));
                    } else {
                        entries.push_str(&format!(
                            "    <li><a href=\"{}\" class=\"flex justify-between{class}\">{inner}</a></li>\n",
                            escape_html(url)
                        ));
                    }
                }
            }
        }

        format!(
            r#"<div class="dropdown {position}">
  <div tabindex="0" role="button" class="btn {variant} btn-sm gap-2">{trigger_icon}{trigger}</div>
  <ul tabindex="0" class="dropdown-content menu z-20 w-56 rounded-box border border-base-300 bg-base-100 p-1 shadow-lg">
{entries}  </ul>
</div>
"#,
            position = lookup(&DROPDOWN_POSITIONS, &self.position),
            variant = lookup(&BUTTON_VARIANTS, &self.trigger_variant),
            trigger_icon = opt_icon(self.trigger_icon.as_deref(), "w-4 h-4"),
            trigger = escape_html(&self.trigger_text),
        )
    }
}
