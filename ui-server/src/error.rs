//! Error types for the KD UI server

use kdui_mcp_protocol::Error;
use kdui_mcp_server::BackendError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while serving tools and resources
#[derive(Debug, Error)]
pub enum KdUiError {
    /// `tools/call` named a tool this server does not offer
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// `resources/read` named a URI outside the catalog
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// A configuration argument is not valid JSON
    #[error("Invalid config JSON: {0}")]
    InvalidConfig(String),

    /// Logging could not be installed
    #[error("Logging setup error: {0}")]
    Logging(String),

    /// Framework-level backend failure
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl KdUiError {
    /// Logging setup failure
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

impl From<KdUiError> for Error {
    fn from(err: KdUiError) -> Self {
        match err {
            KdUiError::UnknownTool(name) => Error::tool_not_found(name),
            KdUiError::ResourceNotFound(uri) => Error::resource_not_found(uri),
            KdUiError::InvalidConfig(msg) => Error::invalid_params(msg),
            KdUiError::Logging(msg) => Error::internal_error(msg),
            KdUiError::Backend(err) => err.into(),
        }
    }
}

/// Errors raised by the `setup` wizard
#[derive(Debug, Error)]
pub enum SetupError {
    /// The server executable or its directory could not be resolved
    #[error("Environment check failed: {0}")]
    Environment(String),

    /// Reading, copying or writing a config file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// An existing config file is not a JSON object
    #[error("Cannot parse {}: {message}", path.display())]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// The servers section exists but is not an object
    #[error("'{key}' in {} is not an object", path.display())]
    InvalidSection {
        /// Offending file
        path: PathBuf,
        /// Section key
        key: String,
    },

    /// The written entry could not be read back
    #[error("Validation of {} failed: {reason}", path.display())]
    Validation {
        /// File checked
        path: PathBuf,
        /// What did not match
        reason: String,
    },

    /// No client configuration location is known on this platform
    #[error("No configuration location for {0}")]
    NoConfigPath(&'static str),

    /// Writing wizard output or reading an answer failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[source] std::io::Error),

    /// Input ended before an answer was given
    #[error("Setup cancelled")]
    Cancelled,

    /// One or more clients could not be configured
    #[error("{0} client(s) could not be configured")]
    ClientsFailed(usize),
}

impl SetupError {
    /// I/O failure on `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
