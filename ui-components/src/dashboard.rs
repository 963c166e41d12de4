//! Dashboard page templates
//!
//! Produces a Jinja template extending `base.html`. Navigation comes from the
//! registry's sidebar or navbar, sections are appended in a fixed order
//! regardless of the order they were requested in.

use crate::component_type::ComponentType;
use crate::components::{Component, ThemeToggle};
use crate::config::{ConfigView, FromConfig};
use crate::ids::IdGenerator;
use crate::markup::{escape_html, indent};
use crate::registry::render_type_with;
use crate::table::{TableConfig, render_table};
use serde_json::{Value, json};
use tracing::debug;

/// Page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardLayout {
    /// Drawer sidebar, open on large screens
    #[default]
    Sidebar,
    /// Horizontal navbar
    Topnav,
}

impl DashboardLayout {
    /// Parse a layout name; unknown names fall back to the sidebar
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "topnav" | "top" | "navbar" => Self::Topnav,
            _ => Self::Sidebar,
        }
    }
}

/// Initial color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTheme {
    /// `data-theme="light"`
    #[default]
    Light,
    /// `data-theme="dark"`
    Dark,
    /// Stored preference, else the system color scheme
    Auto,
}

impl DashboardTheme {
    /// Parse a theme name; unknown names fall back to light
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Self::Dark,
            "auto" | "system" => Self::Auto,
            _ => Self::Light,
        }
    }
}

/// Optional dashboard sections, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DashboardSection {
    /// Four stat cards, or a loop over `stats`
    Stats,
    /// Revenue and user charts
    Charts,
    /// Search and range filter bar
    Filters,
    /// Recent transactions table over `transactions`
    Table,
}

impl DashboardSection {
    /// Parse a section name
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "stats" => Some(Self::Stats),
            "charts" => Some(Self::Charts),
            "filters" => Some(Self::Filters),
            "table" => Some(Self::Table),
            _ => None,
        }
    }
}

/// `create_dashboard` arguments
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Page layout
    pub layout: DashboardLayout,
    /// Page title
    pub title: String,
    /// Initial theme
    pub theme: DashboardTheme,
    /// Sections to include, sorted and without duplicates
    pub components: Vec<DashboardSection>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            layout: DashboardLayout::Sidebar,
            title: "Dashboard".to_string(),
            theme: DashboardTheme::Light,
            components: vec![DashboardSection::Stats, DashboardSection::Charts],
        }
    }
}

impl FromConfig for DashboardConfig {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        let components = match config.string_list("components") {
            Some(names) => {
                let mut sections: Vec<_> = names
                    .iter()
                    .filter_map(|name| DashboardSection::parse(name))
                    .collect();
                sections.sort();
                sections.dedup();
                sections
            }
            None => defaults.components,
        };
        Self {
            layout: DashboardLayout::parse(&config.string("layout", "sidebar")),
            title: config.string("title", &defaults.title),
            theme: DashboardTheme::parse(&config.string("theme", "light")),
            components,
        }
    }
}

/// Render a dashboard from `create_dashboard` arguments
pub fn create_dashboard(args: &Value, ids: &mut dyn IdGenerator) -> String {
    render_dashboard(&DashboardConfig::from_value(args), ids)
}

/// Render a dashboard template
pub fn render_dashboard(config: &DashboardConfig, ids: &mut dyn IdGenerator) -> String {
    debug!(layout = ?config.layout, sections = config.components.len(), "Rendering dashboard");

    let mut sections = String::new();
    for section in &config.components {
        let html = match section {
            DashboardSection::Stats => stats_section(ids),
            DashboardSection::Charts => charts_section(ids),
            DashboardSection::Filters => FILTERS_SECTION.to_string(),
            DashboardSection::Table => table_section(ids),
        };
        sections.push_str(&html);
        sections.push('\n');
    }

    let body = match config.layout {
        DashboardLayout::Sidebar => sidebar_layout(&config.title, &sections, ids),
        DashboardLayout::Topnav => topnav_layout(&config.title, &sections, ids),
    };

    format!(
        "{{% extends \"base.html\" %}}\n\n{{% block title %}}{title}{{% endblock %}}\n\n{{% block extra_head %}}\n{head}{{% endblock %}}\n\n{{% block content %}}\n{body}{{% endblock %}}\n",
        title = escape_html(&config.title),
        head = theme_script(config.theme),
    )
}

fn theme_script(theme: DashboardTheme) -> &'static str {
    match theme {
        DashboardTheme::Light => {
            "<script>document.documentElement.setAttribute('data-theme', 'light');</script>\n"
        }
        DashboardTheme::Dark => {
            "<script>document.documentElement.setAttribute('data-theme', 'dark');</script>\n"
        }
        DashboardTheme::Auto => {
            r#"<script>
  (function () {
    var stored = null;
    try { stored = localStorage.getItem('kd-theme'); } catch (e) {}
    var dark = window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches;
    document.documentElement.setAttribute('data-theme', stored || (dark ? 'dark' : 'light'));
  })();
</script>
"#
        }
    }
}

fn nav_items() -> Value {
    json!([
        {"label": "Dashboard", "url": "/dashboard", "icon": "home", "active": true},
        {"label": "Analytics", "url": "/analytics", "icon": "bar-chart"},
        {"label": "Users", "url": "/users", "icon": "users"},
        {"label": "Settings", "url": "/settings", "icon": "settings"}
    ])
}

fn sidebar_layout(title: &str, sections: &str, ids: &mut dyn IdGenerator) -> String {
    let sidebar = render_type_with(
        ids,
        ComponentType::Sidebar,
        &json!({"brand": "KD Dashboard", "brand_icon": "layout-dashboard", "items": nav_items()}),
    );
    let toggle = ThemeToggle::default().render(ids);

    format!(
        r#"<div class="drawer lg:drawer-open">
  <input id="main-drawer" type="checkbox" class="drawer-toggle" />

  <div class="drawer-content flex flex-col">
    <div class="navbar bg-base-200 shadow-md">
      <div class="flex-1">
        <label for="main-drawer" class="btn btn-square btn-ghost lg:hidden" aria-label="Open menu">
          <i data-lucide="menu" class="w-5 h-5"></i>
        </label>
        <h1 class="text-2xl font-bold ml-2">{title}</h1>
      </div>
      <div class="flex-none gap-2">
        <button type="button" class="btn btn-ghost btn-circle" aria-label="Notifications">
          <i data-lucide="bell" class="w-5 h-5"></i>
        </button>
{toggle}
      </div>
    </div>

    <main class="p-6 bg-base-100">
{sections}    </main>
  </div>

  <div class="drawer-side">
    <label for="main-drawer" class="drawer-overlay" aria-label="Close menu"></label>
{sidebar}
  </div>
</div>
"#,
        title = escape_html(title),
        toggle = indent(&toggle, 8),
        sections = indent(sections, 6),
        sidebar = indent(&sidebar, 4),
    )
}

fn topnav_layout(title: &str, sections: &str, ids: &mut dyn IdGenerator) -> String {
    let navbar = render_type_with(
        ids,
        ComponentType::Navbar,
        &json!({"brand": title, "items": nav_items(), "theme_toggle": true}),
    );

    format!(
        r#"<div class="min-h-screen bg-base-100">
{navbar}

  <main class="container mx-auto p-6">
{sections}  </main>
</div>
"#,
        navbar = indent(&navbar, 2),
        sections = indent(sections, 4),
    )
}

fn stats_section(ids: &mut dyn IdGenerator) -> String {
    let fallback: String = [
        ("Total Revenue", "$45,231", "+23%", "primary"),
        ("New Users", "1,234", "+12%", "secondary"),
        ("Active Sessions", "567", "-5%", "neutral"),
        ("Conversion Rate", "3.2%", "+0.3%", "accent"),
    ]
    .into_iter()
    .map(|(title, value, trend, color)| {
        render_type_with(
            ids,
            ComponentType::StatCard,
            &json!({
                "title": title,
                "value": value,
                "trend": trend,
                "description": "from last month",
                "color": color
            }),
        )
    })
    .collect();

    format!(
        r#"<section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-6" data-dashboard-section="stats">
  {{% if stats %}}
  {{% for stat in stats %}}
  <div class="stats shadow">
    <div class="stat">
      <div class="stat-title">{{{{ stat.title }}}}</div>
      <div class="stat-value text-primary">{{{{ stat.value }}}}</div>
      <div class="stat-desc">{{{{ stat.description }}}}</div>
    </div>
  </div>
  {{% endfor %}}
  {{% else %}}
{fallback}
  {{% endif %}}
</section>
"#,
        fallback = indent(&fallback, 2),
    )
}

fn charts_section(ids: &mut dyn IdGenerator) -> String {
    let revenue = render_type_with(
        ids,
        ComponentType::ChartContainer,
        &json!({
            "id": "revenueChart",
            "title": "Revenue Trend",
            "chart_type": "line",
            "dataset_label": "Revenue",
            "data": [12, 19, 15, 25, 22, 30]
        }),
    );
    let users = render_type_with(
        ids,
        ComponentType::ChartContainer,
        &json!({
            "id": "userChart",
            "title": "User Growth",
            "chart_type": "bar",
            "dataset_label": "Users",
            "data": [120, 150, 180, 210, 260, 310]
        }),
    );

    format!(
        r#"<section class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-6" data-dashboard-section="charts">
{revenue}
{users}
</section>
"#,
        revenue = indent(&revenue, 2),
        users = indent(&users, 2),
    )
}

const FILTERS_SECTION: &str = r#"<section class="card bg-base-100 shadow-xl mb-6" data-dashboard-section="filters">
  <form method="GET" class="card-body flex flex-col gap-4 md:flex-row md:items-end">
    <label class="form-control w-full md:max-w-xs">
      <div class="label"><span class="label-text">Search</span></div>
      <input type="search" name="q" value="{{ request.args.get('q', '') }}" placeholder="Search..." class="input input-bordered w-full" />
    </label>
    <label class="form-control w-full md:max-w-xs">
      <div class="label"><span class="label-text">Date range</span></div>
      <select name="range" class="select select-bordered w-full">
        <option value="7d">Last 7 days</option>
        <option value="30d" selected>Last 30 days</option>
        <option value="90d">Last 90 days</option>
      </select>
    </label>
    <label class="form-control w-full md:max-w-xs">
      <div class="label"><span class="label-text">Status</span></div>
      <select name="status" class="select select-bordered w-full">
        <option value="">All</option>
        <option value="completed">Completed</option>
        <option value="pending">Pending</option>
        <option value="failed">Failed</option>
      </select>
    </label>
    <div class="flex gap-2">
      <button type="submit" class="btn btn-primary">Apply</button>
      <a href="?" class="btn btn-ghost">Reset</a>
    </div>
  </form>
</section>
"#;

fn table_section(ids: &mut dyn IdGenerator) -> String {
    let config = TableConfig::from_value(&json!({
        "title": "Recent Transactions",
        "data_var": "transactions",
        "columns": [
            {"name": "id", "label": "ID"},
            {"name": "name", "label": "Name"},
            {"name": "amount", "label": "Amount", "type": "number"},
            {"name": "status", "label": "Status", "type": "badge"},
            {"name": "date", "label": "Date", "type": "date"}
        ]
    }));
    format!(
        "<section data-dashboard-section=\"table\">\n{}\n</section>\n",
        indent(&render_table(&config, ids), 2)
    )
}
