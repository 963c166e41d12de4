//! JSON-RPC and Model Context Protocol types for the KD UI server
//!
//! Only the slice of MCP the component server speaks lives here: the
//! initialize handshake, tool listing and invocation, and static resources.
//!
//! # Quick Start
//!
//! ```rust
//! use kdui_mcp_protocol::{CallToolResult, Content, Tool};
//! use serde_json::json;
//!
//! let tool = Tool {
//!     name: "add_component".to_string(),
//!     description: "Render a single UI component".to_string(),
//!     input_schema: json!({
//!         "type": "object",
//!         "properties": {
//!             "component_type": {"type": "string"}
//!         },
//!         "required": ["component_type"]
//!     }),
//! };
//!
//! let result = CallToolResult::text("<span class=\"badge\">Badge</span>");
//! assert_eq!(result.is_error, Some(false));
//! assert!(matches!(&result.content[0], Content::Text { .. }));
//! # let _ = tool;
//! ```

pub mod error;
pub mod model;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod model_tests;

pub use error::{Error, ErrorCode, McpResult, Result};
pub use model::*;

/// Protocol version this server prefers
pub const MCP_VERSION: &str = "2025-06-18";

/// Protocol versions accepted during the initialize handshake
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2025-06-18", "2025-03-26", "2024-11-05"];

/// Check if a protocol version is supported
pub fn is_protocol_version_supported(version: &str) -> bool {
    SUPPORTED_PROTOCOL_VERSIONS.contains(&version)
}

/// Pick the version to answer an initialize request with.
///
/// A supported client version is echoed back; anything else gets
/// [`MCP_VERSION`] and the client decides whether it can proceed.
pub fn negotiate_protocol_version(client_version: &str) -> &'static str {
    SUPPORTED_PROTOCOL_VERSIONS
        .iter()
        .find(|v| **v == client_version)
        .copied()
        .unwrap_or(MCP_VERSION)
}

/// Validate MCP protocol version compatibility
///
/// # Errors
///
/// Returns an error if the client version is not supported by this server
pub fn validate_protocol_version(client_version: &str) -> Result<()> {
    if is_protocol_version_supported(client_version) {
        Ok(())
    } else {
        Err(Error::protocol_version_mismatch(client_version, MCP_VERSION))
    }
}
