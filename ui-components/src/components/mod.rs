//! Individual component renderers
//!
//! Each component is a configuration struct with a `Default` matching its
//! documented defaults, read once through [`FromConfig`], and rendered through
//! [`Component`].

use crate::config::FromConfig;
use crate::ids::IdGenerator;

pub mod content;
pub mod feedback;
pub mod landing;
pub mod menu;
pub mod navigation;
pub mod theme;

#[cfg(test)]
mod landing_tests;
#[cfg(test)]
mod menu_tests;

pub use content::{Card, ChartContainer, Modal, Tab, Tabs, Typography};
pub use feedback::{Alert, Badge, Button, Progress, Skeleton, StatCard};
pub use landing::{Cta, Features, Footer, Hero, Pricing, Testimonials};
pub use menu::{MenuBadge, MenuItem};
pub use navigation::{Breadcrumb, DropdownMenu, NavigationMenu, Navbar, Sidebar};
pub use theme::ThemeToggle;

/// A renderable component
pub trait Component: FromConfig {
    /// Render markup. Components that need element ids draw them from `ids`.
    fn render(&self, ids: &mut dyn IdGenerator) -> String;
}

/// Semantic color names to daisyUI color suffixes
pub(crate) const COLORS: [(&str, &str); 9] = [
    ("primary", "primary"),
    ("secondary", "secondary"),
    ("accent", "accent"),
    ("success", "success"),
    ("warning", "warning"),
    ("error", "error"),
    ("destructive", "error"),
    ("info", "info"),
    ("neutral", "neutral"),
];

/// Badge variants
pub(crate) const BADGE_VARIANTS: [(&str, &str); 12] = [
    ("default", "badge-primary"),
    ("primary", "badge-primary"),
    ("secondary", "badge-secondary"),
    ("destructive", "badge-error"),
    ("error", "badge-error"),
    ("outline", "badge-outline"),
    ("success", "badge-success"),
    ("warning", "badge-warning"),
    ("info", "badge-info"),
    ("accent", "badge-accent"),
    ("ghost", "badge-ghost"),
    ("neutral", "badge-neutral"),
];

/// Button variants
pub(crate) const BUTTON_VARIANTS: [(&str, &str); 9] = [
    ("primary", "btn-primary"),
    ("secondary", "btn-secondary"),
    ("accent", "btn-accent"),
    ("ghost", "btn-ghost"),
    ("link", "btn-link"),
    ("outline", "btn-outline"),
    ("destructive", "btn-error"),
    ("error", "btn-error"),
    ("neutral", "btn-neutral"),
];
