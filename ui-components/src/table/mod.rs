//! Data tables with client-side search, sort and pagination
//!
//! Without bound `rows` the body is a template loop over `data_var`, so one
//! generated shell serves any dataset. With `rows` the body, footer count and
//! page strip are pre-rendered in the state the behavior script would reach
//! on load.

mod config;
mod render;
mod script;
mod view;

#[cfg(test)]
mod render_tests;

pub use config::{ColumnType, DefaultSort, SortDirection, TableColumn, TableConfig, TableFeatures};
pub use render::render_table;
pub use view::{PageWindow, TableView, natural_cmp};

use crate::config::FromConfig;
use crate::ids::IdGenerator;
use serde_json::Value;

/// Render a table from `create_table` arguments
pub fn create_table(args: &Value, ids: &mut dyn IdGenerator) -> String {
    render_table(&TableConfig::from_value(args), ids)
}
