//! # KD UI server
//!
//! MCP backend exposing the KD UI component generator, plus the `kd-ui`
//! command-line front end.
//!
//! Tools: `create_dashboard`, `create_form`, `create_table`, `add_component`
//! and `create_landing_page`. Each returns the generated markup as a single
//! text block. Resources cover page templates, design tokens and design
//! guideline documents.
//!
//! ```rust,no_run
//! use kdui_server::{KdUiBackend, KdUiConfig};
//! use kdui_mcp_server::McpServer;
//!
//! # async fn serve() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = KdUiBackend::new(KdUiConfig::default());
//! let config = backend.server_config();
//! McpServer::new(backend, config)?.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod cli;
pub mod error;
pub mod logging;
pub mod setup;
pub mod tools;

pub use backend::{KdUiBackend, KdUiConfig, SERVER_NAME};
pub use cli::{Cli, Command, RenderArgs, SetupArgs};
pub use error::{KdUiError, SetupError};
pub use logging::{LogFormat, LoggingConfig};
pub use setup::{SetupOptions, SetupReport, SetupWizard};
pub use tools::{ToolName, definitions, render_target};

#[cfg(test)]
mod backend_tests;
#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod tools_tests;
