//! Component template registry
//!
//! Maps a component type name to its renderer. Lookup of the name is the only
//! step that can "fail", and it fails soft: unknown names render an HTML
//! comment naming the type so the caller's page still assembles.

use crate::component_type::ComponentType;
use crate::components::{
    Alert, Badge, Breadcrumb, Button, Card, ChartContainer, Component, Cta, DropdownMenu,
    Features, Footer, Hero, Modal, NavigationMenu, Navbar, Pricing, Progress, Sidebar, Skeleton,
    StatCard, Tabs, Testimonials, ThemeToggle, Typography,
};
use crate::ids::{IdGenerator, IdStrategy};
use crate::markup::escape_comment;
use serde_json::Value;
use tracing::debug;

/// Renders components by type name
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRegistry {
    id_strategy: IdStrategy,
}

impl TemplateRegistry {
    /// Registry issuing ids with the given strategy
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self { id_strategy }
    }

    /// Registry with sequential ids, producing identical output for identical
    /// input
    pub fn deterministic() -> Self {
        Self::new(IdStrategy::Sequential)
    }

    /// Strategy used for each render call
    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    /// Render one component by wire name
    pub fn render(&self, name: &str, config: &Value) -> String {
        let mut ids = self.id_strategy.generator();
        self.render_with(ids.as_mut(), name, config)
    }

    /// Render one component of a known type
    pub fn render_type(&self, ty: ComponentType, config: &Value) -> String {
        let mut ids = self.id_strategy.generator();
        render_type_with(ids.as_mut(), ty, config)
    }

    /// Render by wire name with a caller-supplied generator, so composites can
    /// keep ids unique across sections
    pub fn render_with(&self, ids: &mut dyn IdGenerator, name: &str, config: &Value) -> String {
        match ComponentType::parse(name) {
            Some(ty) => render_type_with(ids, ty, config),
            None => {
                debug!(component = name, "Unknown component type");
                unknown_component(name)
            }
        }
    }
}

/// Placeholder for a name outside the closed set
pub fn unknown_component(name: &str) -> String {
    format!("<!-- Unknown component type: {} -->", escape_comment(name))
}

/// Render a known type with a caller-supplied generator
pub fn render_type_with(ids: &mut dyn IdGenerator, ty: ComponentType, config: &Value) -> String {
    debug!(component = ty.as_str(), "Rendering component");
    match ty {
        ComponentType::StatCard => render_as::<StatCard>(ids, config),
        ComponentType::Alert => render_as::<Alert>(ids, config),
        ComponentType::Badge => render_as::<Badge>(ids, config),
        ComponentType::Button => render_as::<Button>(ids, config),
        ComponentType::Card => render_as::<Card>(ids, config),
        ComponentType::Modal => render_as::<Modal>(ids, config),
        ComponentType::Navbar => render_as::<Navbar>(ids, config),
        ComponentType::Sidebar => render_as::<Sidebar>(ids, config),
        ComponentType::NavigationMenu => render_as::<NavigationMenu>(ids, config),
        ComponentType::Breadcrumb => render_as::<Breadcrumb>(ids, config),
        ComponentType::Tabs => render_as::<Tabs>(ids, config),
        ComponentType::Progress => render_as::<Progress>(ids, config),
        ComponentType::Skeleton => render_as::<Skeleton>(ids, config),
        ComponentType::Typography => render_as::<Typography>(ids, config),
        ComponentType::DropdownMenu => render_as::<DropdownMenu>(ids, config),
        ComponentType::ChartContainer => render_as::<ChartContainer>(ids, config),
        ComponentType::Hero => render_as::<Hero>(ids, config),
        ComponentType::Features => render_as::<Features>(ids, config),
        ComponentType::Testimonials => render_as::<Testimonials>(ids, config),
        ComponentType::Pricing => render_as::<Pricing>(ids, config),
        ComponentType::Cta => render_as::<Cta>(ids, config),
        ComponentType::Footer => render_as::<Footer>(ids, config),
        ComponentType::ThemeToggle => render_as::<ThemeToggle>(ids, config),
    }
}

fn render_as<C: Component>(ids: &mut dyn IdGenerator, config: &Value) -> String {
    C::from_value(config).render(ids)
}
