//! Full landing page documents
//!
//! Each section is rendered through the registry with one shared id
//! generator and placed in a standalone HTML document that loads Tailwind,
//! daisyUI and Lucide from their CDNs.

use crate::component_type::ComponentType;
use crate::config::{ConfigView, FromConfig};
use crate::ids::IdGenerator;
use crate::markup::{escape_html, indent};
use crate::registry::render_type_with;
use serde_json::{Value, json};
use tracing::debug;

/// `create_landing_page` arguments
#[derive(Debug, Clone, PartialEq)]
pub struct LandingPageConfig {
    /// Document title
    pub title: String,
    /// Brand used by the navbar and footer
    pub company_name: String,
}

impl Default for LandingPageConfig {
    fn default() -> Self {
        Self {
            title: "KD UI Framework".to_string(),
            company_name: "Your Company".to_string(),
        }
    }
}

impl FromConfig for LandingPageConfig {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            title: config.string("title", &defaults.title),
            company_name: config.string("company_name", &defaults.company_name),
        }
    }
}

/// Render a landing page from `create_landing_page` arguments
pub fn create_landing_page(args: &Value, ids: &mut dyn IdGenerator) -> String {
    render_landing_page(&LandingPageConfig::from_value(args), ids)
}

/// Render a landing page document
pub fn render_landing_page(config: &LandingPageConfig, ids: &mut dyn IdGenerator) -> String {
    debug!(title = %config.title, "Rendering landing page");

    let sections: Vec<(ComponentType, Value)> = vec![
        (
            ComponentType::Navbar,
            json!({
                "brand": config.company_name,
                "items": [
                    {"label": "Features", "url": "#features"},
                    {"label": "Pricing", "url": "#pricing"},
                    {"label": "Docs", "url": "/docs"},
                    {"label": "GitHub", "url": "https://github.com"}
                ],
                "theme_toggle": true
            }),
        ),
        (ComponentType::Hero, hero()),
        (ComponentType::Features, features()),
        (ComponentType::Testimonials, testimonials()),
        (ComponentType::Pricing, pricing()),
        (
            ComponentType::Cta,
            json!({
                "title": "Ready to Build Beautiful UIs?",
                "subtitle": "Join developers worldwide who are creating professional dashboards with KD UI Framework",
                "button_text": "Start Building Now"
            }),
        ),
        (
            ComponentType::Footer,
            json!({
                "company_name": config.company_name,
                "description": "Professional UI components for Flask applications. Built with love for developers who care about design."
            }),
        ),
    ];

    let body: Vec<String> = sections
        .iter()
        .map(|(ty, section)| indent(&render_type_with(ids, *ty, section), 4))
        .collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="en" data-theme="light">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>

    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap" rel="stylesheet">
    <link href="https://cdn.jsdelivr.net/npm/daisyui@4.4.19/dist/full.min.css" rel="stylesheet" type="text/css">
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://unpkg.com/lucide@latest/dist/umd/lucide.js"></script>

    <style>
        body {{
            font-family: 'Inter', system-ui, -apple-system, sans-serif;
        }}
    </style>

    <script>
        tailwind.config = {{
            daisyui: {{
                themes: [{{
                    light: {{
                        "primary": "#2563eb",
                        "secondary": "#64748b",
                        "accent": "#8b5cf6",
                        "neutral": "#1f2937",
                        "base-100": "#ffffff",
                        "base-200": "#f9fafb",
                        "base-300": "#f3f4f6"
                    }}
                }}, "dark"]
            }}
        }};
    </script>
</head>
<body class="bg-base-100">
{body}
    <script>
        if (window.lucide) {{ window.lucide.createIcons(); }}
    </script>
</body>
</html>
"##,
        title = escape_html(&config.title),
        body = body.join("\n"),
    )
}

fn hero() -> Value {
    json!({
        "title": "Build Beautiful Dashboards in Minutes",
        "subtitle": "KD UI Framework provides professional, Shadcn-quality UI components for Flask applications. Stop letting AI generate ugly UIs.",
        "cta_primary": "Get Started Free",
        "cta_secondary": "View Documentation"
    })
}

fn features() -> Value {
    json!({
        "features": [
            {
                "icon": "zap",
                "title": "Lightning Fast Setup",
                "description": "Install via MCP and start generating beautiful UIs in under 60 seconds"
            },
            {
                "icon": "palette",
                "title": "Shadcn-Quality Design",
                "description": "Modern, clean components with Lucide icons and professional styling"
            },
            {
                "icon": "code-2",
                "title": "AI-Powered",
                "description": "Integrated with Cline and Claude Desktop via Model Context Protocol"
            },
            {
                "icon": "layout-dashboard",
                "title": "Complete Dashboards",
                "description": "Generate full dashboards with stats, charts, tables, and navigation"
            },
            {
                "icon": "smartphone",
                "title": "Fully Responsive",
                "description": "Mobile-first design that looks great on all screen sizes"
            },
            {
                "icon": "shield-check",
                "title": "Best Practices",
                "description": "Built-in UI/UX guidelines and accessibility standards"
            }
        ]
    })
}

fn testimonials() -> Value {
    json!({
        "testimonials": [
            {
                "name": "Sarah Johnson",
                "role": "Full Stack Developer",
                "company": "TechStartup Inc",
                "quote": "KD UI Framework saved me hours of UI development. The Shadcn-quality output is incredible!",
                "avatar": "SJ"
            },
            {
                "name": "Mike Chen",
                "role": "Product Manager",
                "company": "Innovation Labs",
                "quote": "Finally, AI-generated UIs that actually look professional. Game changer for our team!",
                "avatar": "MC"
            },
            {
                "name": "Emily Davis",
                "role": "CTO",
                "company": "DataFlow Systems",
                "quote": "The MCP integration with Cline is seamless. We're building dashboards 10x faster now.",
                "avatar": "ED"
            }
        ]
    })
}

fn pricing() -> Value {
    json!({
        "plans": [
            {
                "name": "Open Source",
                "price": "$0",
                "period": "forever",
                "features": [
                    "All UI Components",
                    "Dashboard Generator",
                    "Form Builder",
                    "Community Support"
                ],
                "popular": false
            },
            {
                "name": "Pro",
                "price": "$29",
                "period": "per month",
                "features": [
                    "Everything in Open Source",
                    "Custom Themes",
                    "Priority Support",
                    "Advanced Components",
                    "Commercial License"
                ],
                "popular": true
            },
            {
                "name": "Enterprise",
                "price": "Custom",
                "period": "contact us",
                "features": [
                    "Everything in Pro",
                    "Dedicated Support",
                    "Custom Development",
                    "SLA Guarantee",
                    "Training & Onboarding"
                ],
                "popular": false
            }
        ]
    })
}
