//! Tests for landing page sections

use crate::components::{Component, Cta, Features, Footer, Hero, Pricing, Testimonials};
use crate::config::FromConfig;
use crate::ids::SequentialIds;
use chrono::Datelike;
use serde_json::json;

fn render<C: Component>(config: serde_json::Value) -> String {
    C::from_value(&config).render(&mut SequentialIds::new())
}

#[test]
fn test_empty_config_matches_defaults() {
    assert_eq!(Hero::from_value(&json!({})), Hero::default());
    assert_eq!(Features::from_value(&json!({})), Features::default());
    assert_eq!(Testimonials::from_value(&json!({})), Testimonials::default());
    assert_eq!(Pricing::from_value(&json!({})), Pricing::default());
    assert_eq!(Cta::from_value(&json!({})), Cta::default());
    assert_eq!(Footer::from_value(&json!({})), Footer::default());
}

#[test]
fn test_hero_defaults() {
    let html = render::<Hero>(json!({}));
    assert!(html.contains("Build Something Amazing"));
    assert!(html.contains(">Get Started</a>"));
    assert!(html.contains(">Learn More</a>"));
    assert!(html.contains("text-center"));
}

#[test]
fn test_hero_empty_secondary_is_omitted() {
    let html = render::<Hero>(json!({
        "cta_secondary": "",
        "cta_primary_url": "/signup",
        "alignment": "left"
    }));
    assert!(!html.contains("btn-outline"));
    assert!(html.contains("href=\"/signup\""));
    assert!(html.contains("text-left"));
}

#[test]
fn test_features_grid() {
    let html = render::<Features>(json!({}));
    assert_eq!(html.matches("card-title").count(), 3);
    assert!(html.contains("lg:grid-cols-3"));

    let html = render::<Features>(json!({
        "columns": 4,
        "features": [
            {"icon": "zap", "title": "Fast", "description": "Quick"},
            {"title": "Safe"}
        ]
    }));
    assert!(html.contains("lg:grid-cols-4"));
    assert_eq!(html.matches("card-title").count(), 2);
    assert!(html.contains("data-lucide=\"star\""));
    assert!(html.find("Fast").unwrap() < html.find("Safe").unwrap());
}

#[test]
fn test_features_unknown_columns_fall_back() {
    let html = render::<Features>(json!({"columns": 7}));
    assert!(html.contains("md:grid-cols-2 lg:grid-cols-3"));
}

#[test]
fn test_testimonial_avatars() {
    let html = render::<Testimonials>(json!({
        "testimonials": [
            {"name": "Ada Lovelace", "role": "Engineer", "company": "Analytical", "quote": "Brilliant"},
            {"name": "Grace", "quote": "Neat", "avatar": "https://example.com/g.png"},
            {"name": "Mike Chen", "quote": "Great", "avatar": "MC"}
        ]
    }));
    assert!(html.contains("<span>AL</span>"));
    assert!(html.contains("<img src=\"https://example.com/g.png\" alt=\"Grace\" />"));
    assert!(html.contains("<span>MC</span>"));
    assert!(html.contains("Engineer, Analytical"));
    assert!(html.contains("&ldquo;Brilliant&rdquo;"));
}

#[test]
fn test_pricing_popular_plan() {
    let html = render::<Pricing>(json!({}));
    assert_eq!(html.matches("Most Popular").count(), 1);
    assert_eq!(html.matches(">Get Started</a>").count(), 3);

    let html = render::<Pricing>(json!({
        "plans": [{
            "name": "Team",
            "price": "$9",
            "period": "per seat",
            "features": ["SSO", "Audit log"],
            "cta_text": "Buy",
            "cta_url": "/buy"
        }]
    }));
    assert!(!html.contains("Most Popular"));
    assert!(html.contains("<span>SSO</span>"));
    assert!(html.contains("<a href=\"/buy\" class=\"btn btn-outline w-full\">Buy</a>"));
}

#[test]
fn test_cta_variants() {
    let html = render::<Cta>(json!({}));
    assert!(html.contains("bg-primary text-primary-content"));
    assert!(html.contains("Ready to Get Started?"));

    let html = render::<Cta>(json!({"variant": "neutral", "button_url": "/go"}));
    assert!(html.contains("bg-neutral"));
    assert!(html.contains("href=\"/go\""));

    let html = render::<Cta>(json!({"variant": "rainbow"}));
    assert!(html.contains("bg-primary"));
}

#[test]
fn test_footer_defaults_use_current_year() {
    let year = chrono::Utc::now().year();
    let html = render::<Footer>(json!({}));
    assert!(html.contains(&format!("&copy; {year} Your Company.")));
    assert_eq!(html.matches("footer-title").count(), 3);
}

#[test]
fn test_footer_custom_links_and_year() {
    let html = render::<Footer>(json!({
        "company_name": "Acme & Co",
        "year": 2030,
        "links": [{"title": "Legal", "links": [{"label": "Terms", "url": "/terms"}, "Privacy"]}]
    }));
    assert!(html.contains("&copy; 2030 Acme &amp; Co."));
    assert_eq!(html.matches("footer-title").count(), 1);
    assert!(html.contains("<a href=\"/terms\" class=\"link link-hover\">Terms</a>"));
    assert!(html.contains("<a href=\"#\" class=\"link link-hover\">Privacy</a>"));
}
