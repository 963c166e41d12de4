//! `kd-ui` binary

use anyhow::Context;
use clap::Parser;
use kdui_mcp_server::{McpBackend, McpServer};
use kdui_server::setup::TerminalConfirm;
use kdui_server::{Cli, Command, KdUiBackend, KdUiConfig, RenderArgs, SetupWizard, render_target};
use std::io;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.logging().initialize()?;

    match cli.selected_command() {
        Command::Serve => serve().await,
        Command::Render(args) => render(&args),
        Command::Setup(args) => {
            let wizard = SetupWizard::new(args.into(), TerminalConfirm::new(), io::stdout());
            let report = wizard.run().context("Setup failed")?;
            info!(configured = report.configured.len(), "Setup finished");
            Ok(())
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    let backend = KdUiBackend::initialize(KdUiConfig::default()).await?;
    let config = backend.server_config();
    let mut server = McpServer::new(backend, config)?;
    server.run().await?;
    Ok(())
}

fn render(args: &RenderArgs) -> anyhow::Result<()> {
    let config = if args.deterministic {
        KdUiConfig::deterministic()
    } else {
        KdUiConfig::default()
    };
    let backend = KdUiBackend::new(config);
    let markup = render_target(backend.registry(), &args.component_type, &args.config)?;
    println!("{markup}");
    Ok(())
}
