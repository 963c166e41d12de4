//! Tests for dashboard templates

use crate::config::FromConfig;
use crate::dashboard::{
    DashboardConfig, DashboardLayout, DashboardSection, DashboardTheme, create_dashboard,
};
use crate::ids::{RandomIds, SequentialIds};
use crate::test_support::{duplicate_ids, id_count};
use serde_json::{Value, json};

fn render(args: Value) -> String {
    create_dashboard(&args, &mut SequentialIds::new())
}

#[test]
fn test_config_defaults() {
    let config = DashboardConfig::from_value(&json!({}));
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.layout, DashboardLayout::Sidebar);
    assert_eq!(config.theme, DashboardTheme::Light);
    assert_eq!(
        config.components,
        vec![DashboardSection::Stats, DashboardSection::Charts]
    );
}

#[test]
fn test_sections_sorted_and_deduplicated() {
    let config = DashboardConfig::from_value(&json!({
        "components": ["table", "bogus", "STATS", "table", "filters"]
    }));
    assert_eq!(
        config.components,
        vec![
            DashboardSection::Stats,
            DashboardSection::Filters,
            DashboardSection::Table
        ]
    );
}

#[test]
fn test_template_wrapper() {
    let html = render(json!({"title": "Ops <Center>"}));
    assert!(html.starts_with("{% extends \"base.html\" %}"));
    assert!(html.contains("{% block title %}Ops &lt;Center&gt;{% endblock %}"));
    assert!(html.contains("{% block content %}"));
    assert!(html.trim_end().ends_with("{% endblock %}"));
}

#[test]
fn test_default_sidebar_dashboard() {
    let html = render(json!({}));
    assert!(html.contains("drawer lg:drawer-open"));
    assert!(html.contains("id=\"sidebar-1\""));
    assert!(html.contains("KD Dashboard"));
    assert!(html.contains("href=\"/users\""));
    assert!(html.contains("{% for stat in stats %}"));
    assert!(html.contains("Total Revenue"));
    assert!(html.contains("Conversion Rate"));
    assert!(html.contains("id=\"revenueChart\""));
    assert!(html.contains("id=\"userChart\""));
    assert!(!html.contains("data-dashboard-section=\"table\""));
    assert!(!html.contains("data-dashboard-section=\"filters\""));
}

#[test]
fn test_sections_render_in_fixed_order() {
    let html = render(json!({"components": ["table", "filters", "charts", "stats"]}));
    let stats = html.find("data-dashboard-section=\"stats\"").unwrap();
    let charts = html.find("data-dashboard-section=\"charts\"").unwrap();
    let filters = html.find("data-dashboard-section=\"filters\"").unwrap();
    let table = html.find("data-dashboard-section=\"table\"").unwrap();
    assert!(stats < charts && charts < filters && filters < table);
}

#[test]
fn test_table_section_loops_over_transactions() {
    let html = render(json!({"components": ["table"]}));
    assert!(html.contains("Recent Transactions"));
    assert!(html.contains("{% for row in transactions %}"));
    assert!(html.contains("badge-{{ row.status_color or 'primary' }}"));
    assert!(html.contains("id=\"table-1\""));
    assert!(!html.contains("{% for stat in stats %}"));
}

#[test]
fn test_empty_components_list() {
    let html = render(json!({"components": []}));
    assert!(!html.contains("data-dashboard-section"));
    assert!(html.contains("drawer-side"));
}

#[test]
fn test_topnav_layout() {
    let html = render(json!({"layout": "topnav", "title": "Metrics"}));
    assert!(!html.contains("drawer"));
    assert!(html.contains("menu menu-horizontal"));
    assert!(html.contains(">Metrics</a>"));
    assert!(html.contains("data-theme-toggle"));
    assert!(html.contains("data-dashboard-section=\"stats\""));
}

#[test]
fn test_theme_scripts() {
    assert!(render(json!({"theme": "dark"})).contains("setAttribute('data-theme', 'dark')"));
    assert!(render(json!({})).contains("setAttribute('data-theme', 'light')"));
    let auto = render(json!({"theme": "auto"}));
    assert!(auto.contains("prefers-color-scheme: dark"));
    assert!(auto.contains("localStorage.getItem('kd-theme')"));
}

#[test]
fn test_ids_are_unique_within_one_render() {
    for layout in ["sidebar", "topnav"] {
        let html = render(json!({
            "layout": layout,
            "components": ["stats", "charts", "filters", "table"]
        }));
        assert!(id_count(&html) > 1, "{layout} layout emits no ids");
        assert_eq!(duplicate_ids(&html), Vec::<String>::new(), "{layout} layout");
    }
}

#[test]
fn test_deterministic_output() {
    let args = json!({"components": ["stats", "table"], "layout": "topnav"});
    assert_eq!(render(args.clone()), render(args));
}

#[test]
fn test_random_ids_are_unique_within_one_render() {
    let html = create_dashboard(
        &json!({"components": ["stats", "charts", "filters", "table"]}),
        &mut RandomIds,
    );
    assert!(duplicate_ids(&html).is_empty());
}
