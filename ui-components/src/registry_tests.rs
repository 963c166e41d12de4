//! Tests for the component registry

use crate::component_type::ComponentType;
use crate::ids::{IdStrategy, SequentialIds};
use crate::registry::{TemplateRegistry, unknown_component};
use serde_json::json;

fn default_marker(ty: ComponentType) -> &'static str {
    match ty {
        ComponentType::StatCard => "Stat Title",
        ComponentType::Alert => "This is an alert message",
        ComponentType::Badge => "Badge",
        ComponentType::Button => "Button",
        ComponentType::Card => "Card Title",
        ComponentType::Modal => "Open Modal",
        ComponentType::Navbar => "Brand",
        ComponentType::Sidebar => "Dashboard",
        ComponentType::NavigationMenu => "Products",
        ComponentType::Breadcrumb => "Current Page",
        ComponentType::Tabs => "Tab 1",
        ComponentType::Progress => "progress",
        ComponentType::Skeleton => "skeleton",
        ComponentType::Typography => "Typography",
        ComponentType::DropdownMenu => "Options",
        ComponentType::ChartContainer => "<canvas",
        ComponentType::Hero => "Build Something Amazing",
        ComponentType::Features => "Features",
        ComponentType::Testimonials => "What Our Customers Say",
        ComponentType::Pricing => "Simple, Transparent Pricing",
        ComponentType::Cta => "Ready to Get Started?",
        ComponentType::Footer => "Your Company",
        ComponentType::ThemeToggle => "data-theme-toggle",
    }
}

#[test]
fn test_every_type_renders_defaults() {
    let registry = TemplateRegistry::deterministic();
    for ty in ComponentType::ALL {
        let html = registry.render(ty.as_str(), &json!({}));
        assert!(!html.trim().is_empty(), "{ty} rendered nothing");
        assert!(html.contains(default_marker(ty)), "{ty} missing its default");
        assert!(!html.contains("Unknown component type"), "{ty}");
    }
}

#[test]
fn test_badge_default_text() {
    let html = TemplateRegistry::deterministic().render("badge", &json!({}));
    assert!(html.contains(">Badge</span>"));
}

#[test]
fn test_null_and_non_object_config_act_as_empty() {
    let registry = TemplateRegistry::deterministic();
    let expected = registry.render("button", &json!({}));
    assert_eq!(registry.render("button", &json!(null)), expected);
    assert_eq!(registry.render("button", &json!([1, 2])), expected);
    assert_eq!(registry.render("button", &json!("primary")), expected);
}

#[test]
fn test_unknown_type_placeholder() {
    let registry = TemplateRegistry::deterministic();
    let html = registry.render("carousel", &json!({"title": "x"}));
    assert_eq!(html, "<!-- Unknown component type: carousel -->");
    assert!(!html.contains("class="));

    // Matching is exact
    assert!(registry.render("Badge", &json!({})).contains("Unknown component type: Badge"));
    assert!(registry.render("", &json!({})).contains("Unknown component type: "));
}

#[test]
fn test_unknown_name_cannot_close_the_comment() {
    let html = unknown_component("x --><script>alert(1)</script>");
    assert!(html.starts_with("<!-- Unknown component type: "));
    assert!(html.ends_with(" -->"));
    assert_eq!(html.matches("-->").count(), 1);
    assert!(!html.contains("<script>"));
}

#[test]
fn test_deterministic_render_is_idempotent() {
    let registry = TemplateRegistry::deterministic();
    for ty in ComponentType::ALL {
        let config = json!({"title": "Same"});
        assert_eq!(
            registry.render_type(ty, &config),
            registry.render_type(ty, &config),
            "{ty}"
        );
    }
}

#[test]
fn test_random_ids_differ_between_calls() {
    let registry = TemplateRegistry::new(IdStrategy::Random);
    assert_eq!(registry.id_strategy(), IdStrategy::Random);
    let first = registry.render("modal", &json!({}));
    let second = registry.render("modal", &json!({}));
    assert_ne!(first, second);
}

#[test]
fn test_shared_generator_keeps_ids_unique() {
    let registry = TemplateRegistry::deterministic();
    let mut ids = SequentialIds::new();
    let first = registry.render_with(&mut ids, "modal", &json!({}));
    let second = registry.render_with(&mut ids, "modal", &json!({}));
    assert!(first.contains("id=\"modal-1\""));
    assert!(second.contains("id=\"modal-2\""));
}
