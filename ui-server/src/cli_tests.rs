//! Tests for command-line parsing

use crate::cli::{Cli, Command, RenderArgs, SetupArgs};
use crate::logging::LogFormat;
use crate::setup::{ClientChoice, SetupOptions};
use clap::{CommandFactory, Parser};
use serial_test::serial;
use std::env;

#[test]
fn test_cli_definition_is_valid() {
    <Cli as CommandFactory>::command().debug_assert();
}

#[test]
#[serial]
fn test_no_subcommand_serves() {
    let cli = Cli::try_parse_from(["kd-ui"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.selected_command(), Command::Serve);
}

#[test]
#[serial]
fn test_global_logging_flags() {
    let cli =
        Cli::try_parse_from(["kd-ui", "serve", "--log-level", "debug", "--log-format", "json"]).unwrap();
    assert_eq!(cli.selected_command(), Command::Serve);
    let logging = cli.logging();
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.format, LogFormat::Json);
}

#[test]
fn test_render_arguments() {
    let cli = Cli::try_parse_from(["kd-ui", "render", "badge"]).unwrap();
    assert_eq!(
        cli.selected_command(),
        Command::Render(RenderArgs {
            component_type: "badge".to_string(),
            config: "{}".to_string(),
            deterministic: false,
        })
    );

    let cli = Cli::try_parse_from([
        "kd-ui",
        "render",
        "alert",
        "--config",
        r#"{"type": "error"}"#,
        "--deterministic",
    ])
    .unwrap();
    let Command::Render(args) = cli.selected_command() else {
        panic!("expected render");
    };
    assert_eq!(args.config, r#"{"type": "error"}"#);
    assert!(args.deterministic);
}

#[test]
fn test_render_requires_component_type() {
    assert!(Cli::try_parse_from(["kd-ui", "render"]).is_err());
}

#[test]
fn test_setup_defaults() {
    let cli = Cli::try_parse_from(["kd-ui", "setup"]).unwrap();
    let Command::Setup(args) = cli.selected_command() else {
        panic!("expected setup");
    };
    assert_eq!(
        args,
        SetupArgs {
            client: ClientChoice::All,
            yes: false,
            server_name: "kd-ui".to_string(),
        }
    );
    assert_eq!(SetupOptions::from(args), SetupOptions::default());
}

#[test]
fn test_setup_flags() {
    let cli =
        Cli::try_parse_from(["kd-ui", "setup", "--client", "claude", "-y", "--server-name", "ui"]).unwrap();
    let Command::Setup(args) = cli.selected_command() else {
        panic!("expected setup");
    };
    let options = SetupOptions::from(args);
    assert_eq!(options.clients, ClientChoice::Claude);
    assert!(options.assume_yes);
    assert_eq!(options.server_name, "ui");
}

#[test]
fn test_unknown_client_rejected() {
    assert!(Cli::try_parse_from(["kd-ui", "setup", "--client", "cursor"]).is_err());
}

#[test]
#[serial]
fn test_logging_flags_from_environment() {
    unsafe {
        env::set_var("KD_UI_LOG_LEVEL", "kdui_server=trace");
        env::set_var("KD_UI_LOG_FORMAT", "compact");
    }

    let from_env = Cli::try_parse_from(["kd-ui"]).unwrap();
    let overridden = Cli::try_parse_from(["kd-ui", "--log-level", "warn"]).unwrap();

    unsafe {
        env::remove_var("KD_UI_LOG_LEVEL");
        env::remove_var("KD_UI_LOG_FORMAT");
    }

    assert_eq!(from_env.log_level, "kdui_server=trace");
    assert_eq!(from_env.log_format, LogFormat::Compact);
    assert_eq!(overridden.log_level, "warn");
}
