//! Transport configuration

use serde::{Deserialize, Serialize};

/// Configuration for stdio transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdioConfig {
    /// Maximum message size in bytes (default: 10MB)
    pub max_message_size: usize,
    /// Enable message validation
    pub validate_messages: bool,
}

impl Default for StdioConfig {
    fn default() -> Self {
        Self {
            max_message_size: 10 * 1024 * 1024,
            validate_messages: true,
        }
    }
}

/// Transport configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportConfig {
    /// Standard I/O transport (for MCP host applications)
    Stdio(StdioConfig),
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::Stdio(StdioConfig::default())
    }
}

impl TransportConfig {
    /// Create stdio transport configuration with defaults
    pub fn stdio() -> Self {
        Self::default()
    }

    /// Stdio transport with a custom message size limit
    pub fn stdio_with_limit(max_message_size: usize) -> Self {
        Self::Stdio(StdioConfig {
            max_message_size,
            ..StdioConfig::default()
        })
    }
}
