//! Transport layer for the KD UI MCP server
//!
//! Hosts launch the server as a subprocess and talk JSON-RPC over its
//! stdin/stdout, one message per line. That is the only transport.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kdui_mcp_transport::{create_transport, RequestHandler, TransportConfig};
//! use kdui_mcp_protocol::{Request, Response};
//!
//! # async fn run() -> Result<(), kdui_mcp_transport::TransportError> {
//! let mut transport = create_transport(TransportConfig::default())?;
//! let handler: RequestHandler = Box::new(|request: Request| {
//!     Box::pin(async move { Response::success(request.id, serde_json::json!({})) })
//! });
//! transport.start(handler).await?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod config;
pub mod stdio;
pub mod validation;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod validation_tests;

use async_trait::async_trait;
use kdui_mcp_protocol::{Request, Response};
use thiserror::Error as ThisError;

pub use config::{StdioConfig, TransportConfig};

/// Errors raised by a transport
#[derive(Debug, ThisError)]
pub enum TransportError {
    /// Invalid transport configuration
    #[error("Transport configuration error: {0}")]
    Config(String),

    /// Reading from or writing to the peer failed
    #[error("Connection error: {0}")]
    Connection(String),

    /// A frame could not be encoded or violated the wire rules
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Request handler function type
pub type RequestHandler = Box<
    dyn Fn(Request) -> std::pin::Pin<Box<dyn std::future::Future<Output = Response> + Send>>
        + Send
        + Sync,
>;

/// Transport layer trait
#[async_trait]
pub trait Transport: Send + Sync {
    /// Serve requests until the peer hangs up or [`Transport::stop`] is called
    async fn start(&mut self, handler: RequestHandler) -> std::result::Result<(), TransportError>;
    /// Ask the serving loop to finish
    async fn stop(&mut self) -> std::result::Result<(), TransportError>;
    /// Report whether the transport is serving
    async fn health_check(&self) -> std::result::Result<(), TransportError>;
}

/// Create a transport from configuration
pub fn create_transport(
    config: TransportConfig,
) -> std::result::Result<Box<dyn Transport>, TransportError> {
    match config {
        TransportConfig::Stdio(stdio) => {
            if stdio.max_message_size == 0 {
                return Err(TransportError::Config(
                    "max_message_size must be greater than zero".to_string(),
                ));
            }
            Ok(Box::new(stdio::StdioTransport::with_config(stdio)))
        }
    }
}
