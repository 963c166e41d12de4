//! Tracing subscriber setup
//!
//! Logs always go to stderr. When serving, stdout carries the JSON-RPC stream
//! and a stray log line there would break the client.

use crate::error::KdUiError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Configuration with the given level and format
    pub fn new(level: impl Into<String>, format: LogFormat) -> Self {
        Self {
            level: level.into(),
            format,
        }
    }

    /// Filter from `RUST_LOG`, else from the configured level
    pub fn filter(&self) -> Result<EnvFilter, KdUiError> {
        let directives = resolve_directives(env::var("RUST_LOG").ok().as_deref(), &self.level);
        EnvFilter::try_new(&directives)
            .map_err(|e| KdUiError::logging(format!("Invalid log level '{directives}': {e}")))
    }

    /// Install the global subscriber
    pub fn initialize(&self) -> Result<(), KdUiError> {
        let filter = self.filter()?;
        let registry = tracing_subscriber::registry().with(filter);

        let installed = match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init(),
        };

        installed.map_err(|e| KdUiError::logging(e.to_string()))
    }
}

/// `RUST_LOG` wins when set and non-empty
pub(crate) fn resolve_directives(rust_log: Option<&str>, level: &str) -> String {
    rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(level)
        .to_string()
}
