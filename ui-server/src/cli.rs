//! Command-line interface

use crate::backend::SERVER_NAME;
use crate::logging::{LogFormat, LoggingConfig};
use crate::setup::{ClientChoice, SetupOptions};
use clap::{Args, Parser, Subcommand};

/// KD UI MCP server
#[derive(Debug, Parser)]
#[command(name = "kd-ui")]
#[command(about = "DaisyUI/Tailwind component generator served over MCP")]
#[command(version)]
pub struct Cli {
    /// Log level or tracing filter directives; RUST_LOG takes precedence
    #[arg(long, global = true, env = "KD_UI_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(
        long,
        global = true,
        env = "KD_UI_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    /// Command to run; serves over stdio when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Logging settings from the global flags
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig::new(&self.log_level, self.log_format)
    }

    /// Selected command, `serve` by default
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

/// Subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the MCP server over stdio
    Serve,

    /// Print the markup for one component or tool
    Render(RenderArgs),

    /// Register the server with MCP clients
    Setup(SetupArgs),
}

/// Arguments of `render`
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct RenderArgs {
    /// Component type (e.g. `badge`) or tool name (e.g. `create_table`)
    pub component_type: String,

    /// Configuration as a JSON object
    #[arg(long, default_value = "{}")]
    pub config: String,

    /// Number element ids sequentially instead of randomly
    #[arg(long)]
    pub deterministic: bool,
}

/// Arguments of `setup`
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct SetupArgs {
    /// Clients to configure
    #[arg(long, value_enum, default_value_t = ClientChoice::All)]
    pub client: ClientChoice,

    /// Configure without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Name of the server entry
    #[arg(long, default_value = SERVER_NAME)]
    pub server_name: String,
}

impl From<SetupArgs> for SetupOptions {
    fn from(args: SetupArgs) -> Self {
        Self {
            clients: args.client,
            assume_yes: args.yes,
            server_name: args.server_name,
        }
    }
}
