//! MCP server infrastructure with a pluggable backend
//!
//! The backend supplies tools and resources; this crate answers the protocol
//! methods around them and drives the transport.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use kdui_mcp_server::{BackendError, McpBackend, McpServer, ServerConfig};
//! use kdui_mcp_protocol::{
//!     CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
//!     PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
//! };
//!
//! #[derive(Clone)]
//! struct MyBackend;
//!
//! #[async_trait]
//! impl McpBackend for MyBackend {
//!     type Error = BackendError;
//!     type Config = ();
//!
//!     async fn initialize(_: ()) -> Result<Self, Self::Error> {
//!         Ok(MyBackend)
//!     }
//!
//!     fn get_server_info(&self) -> ServerInfo {
//!         ServerInfo {
//!             protocol_version: ProtocolVersion::default(),
//!             capabilities: ServerCapabilities::builder().enable_tools().build(),
//!             server_info: Implementation {
//!                 name: "my-server".to_string(),
//!                 version: "1.0.0".to_string(),
//!             },
//!             instructions: None,
//!         }
//!     }
//!
//!     async fn list_tools(&self, _: PaginatedRequestParam) -> Result<ListToolsResult, Self::Error> {
//!         Ok(ListToolsResult { tools: vec![], next_cursor: None })
//!     }
//!
//!     async fn call_tool(&self, request: CallToolRequestParam) -> Result<CallToolResult, Self::Error> {
//!         Err(BackendError::not_supported(request.name))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = MyBackend::initialize(()).await?;
//!     let mut server = McpServer::new(backend, ServerConfig::default())?;
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod context;
pub mod handler;
pub mod server;

#[cfg(test)]
mod backend_tests;
#[cfg(test)]
mod handler_tests;
#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod server_tests;

pub use backend::{BackendError, McpBackend};
pub use context::RequestContext;
pub use handler::{GenericServerHandler, HandlerError};
pub use server::{HealthStatus, McpServer, ServerConfig, ServerError};

pub use kdui_mcp_protocol::{self as protocol, *};
pub use kdui_mcp_transport::{self as transport, Transport, TransportConfig};
