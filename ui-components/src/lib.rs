//! DaisyUI/Tailwind markup generation for KD UI
//!
//! The [`TemplateRegistry`] maps a component type name and a JSON
//! configuration to a markup string. Every field has a default, so any object
//! (including `{}`) renders; unknown type names render an HTML comment instead
//! of failing. On top of the registry sit the data table renderer, the form
//! builder and the dashboard and landing page composers.
//!
//! # Quick Start
//!
//! ```rust
//! use kdui_components::TemplateRegistry;
//! use serde_json::json;
//!
//! let registry = TemplateRegistry::deterministic();
//! let html = registry.render("badge", &json!({"text": "New", "variant": "success"}));
//! assert!(html.contains("badge-success"));
//! ```

pub mod component_type;
pub mod components;
pub mod config;
pub mod dashboard;
pub mod design_system;
pub mod form;
pub mod ids;
pub mod landing_page;
pub mod markup;
pub mod registry;
pub mod resources;
pub mod table;

#[cfg(test)]
mod dashboard_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod resources_tests;
#[cfg(test)]
mod test_support;

pub use component_type::ComponentType;
pub use components::Component;
pub use config::{ConfigView, FromConfig};
pub use dashboard::{DashboardConfig, create_dashboard, render_dashboard};
pub use form::{FormConfig, create_form, render_form};
pub use ids::{IdGenerator, IdStrategy, RandomIds, SequentialIds};
pub use landing_page::{LandingPageConfig, create_landing_page, render_landing_page};
pub use registry::{TemplateRegistry, render_type_with, unknown_component};
pub use resources::ResourceEntry;
pub use table::{TableConfig, create_table, render_table};
