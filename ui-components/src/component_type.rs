//! The closed set of component types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every component the registry can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Metric display card
    StatCard,
    /// Toast notification
    Alert,
    /// Status label
    Badge,
    /// Button or button-styled link
    Button,
    /// Content container
    Card,
    /// Dialog with trigger
    Modal,
    /// Top navigation bar
    Navbar,
    /// Side navigation with submenus
    Sidebar,
    /// Horizontal menu with dropdown panels
    NavigationMenu,
    /// Breadcrumb trail
    Breadcrumb,
    /// Tabbed content
    Tabs,
    /// Progress bar
    Progress,
    /// Loading placeholder
    Skeleton,
    /// Text styles
    Typography,
    /// Dropdown with items and separators
    DropdownMenu,
    /// Chart.js canvas container
    ChartContainer,
    /// Landing hero section
    Hero,
    /// Landing features grid
    Features,
    /// Landing testimonials
    Testimonials,
    /// Landing pricing plans
    Pricing,
    /// Landing call to action
    Cta,
    /// Page footer
    Footer,
    /// Light/dark switch
    ThemeToggle,
}

impl ComponentType {
    /// All types in registry order
    pub const ALL: [ComponentType; 23] = [
        ComponentType::StatCard,
        ComponentType::Alert,
        ComponentType::Badge,
        ComponentType::Button,
        ComponentType::Card,
        ComponentType::Modal,
        ComponentType::Navbar,
        ComponentType::Sidebar,
        ComponentType::NavigationMenu,
        ComponentType::Breadcrumb,
        ComponentType::Tabs,
        ComponentType::Progress,
        ComponentType::Skeleton,
        ComponentType::Typography,
        ComponentType::DropdownMenu,
        ComponentType::ChartContainer,
        ComponentType::Hero,
        ComponentType::Features,
        ComponentType::Testimonials,
        ComponentType::Pricing,
        ComponentType::Cta,
        ComponentType::Footer,
        ComponentType::ThemeToggle,
    ];

    /// Wire name, as accepted by `add_component`
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::StatCard => "stat_card",
            ComponentType::Alert => "alert",
            ComponentType::Badge => "badge",
            ComponentType::Button => "button",
            ComponentType::Card => "card",
            ComponentType::Modal => "modal",
            ComponentType::Navbar => "navbar",
            ComponentType::Sidebar => "sidebar",
            ComponentType::NavigationMenu => "navigation_menu",
            ComponentType::Breadcrumb => "breadcrumb",
            ComponentType::Tabs => "tabs",
            ComponentType::Progress => "progress",
            ComponentType::Skeleton => "skeleton",
            ComponentType::Typography => "typography",
            ComponentType::DropdownMenu => "dropdown_menu",
            ComponentType::ChartContainer => "chart_container",
            ComponentType::Hero => "hero",
            ComponentType::Features => "features",
            ComponentType::Testimonials => "testimonials",
            ComponentType::Pricing => "pricing",
            ComponentType::Cta => "cta",
            ComponentType::Footer => "footer",
            ComponentType::ThemeToggle => "theme_toggle",
        }
    }

    /// Parse a wire name. Matching is exact; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == name)
    }

    /// Short description used in tool listings
    pub fn description(self) -> &'static str {
        match self {
            ComponentType::StatCard => "Metric display card with value, title and trend",
            ComponentType::Alert => {
                "Toast notification (fixed overlay, auto-dismisses); supports type, duration, position, dismissable"
            }
            ComponentType::Badge => "Status indicators and labels",
            ComponentType::Button => "Buttons in primary, secondary, ghost, outline and other styles",
            ComponentType::Card => "Content container with optional image and actions",
            ComponentType::Modal => "Dialog overlay with trigger button",
            ComponentType::Navbar => "Top navigation bar with optional dropdowns and theme toggle",
            ComponentType::Sidebar => "Side navigation menu with icons, badges and submenus",
            ComponentType::NavigationMenu => "Horizontal menu with described dropdown panels",
            ComponentType::Breadcrumb => "Navigation breadcrumb trail",
            ComponentType::Tabs => "Tabbed content sections",
            ComponentType::Progress => "Progress bar with optional percentage label",
            ComponentType::Skeleton => "Loading skeleton placeholders",
            ComponentType::Typography => "Headings, paragraphs, quotes, code and lists",
            ComponentType::DropdownMenu => {
                "Dropdown menu with items, icons, shortcuts, separators and variants"
            }
            ComponentType::ChartContainer => "Card containing a Chart.js chart",
            ComponentType::Hero => "Landing page hero banner",
            ComponentType::Features => "Landing page features grid",
            ComponentType::Testimonials => "Landing page testimonials",
            ComponentType::Pricing => "Landing page pricing plans",
            ComponentType::Cta => "Landing page call to action",
            ComponentType::Footer => "Page footer with link columns",
            ComponentType::ThemeToggle => "Light/dark theme toggle button",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
