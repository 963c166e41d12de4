//! Request context for MCP operations

use kdui_mcp_protocol::Implementation;
use std::time::Instant;
use uuid::Uuid;

/// Per-request bookkeeping used for tracing
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID, independent of the JSON-RPC id
    pub request_id: Uuid,
    /// Method being handled
    pub method: String,
    /// Client that sent the request, once known
    pub client_info: Option<Implementation>,
    started: Instant,
}

impl RequestContext {
    /// Create a context for a method
    pub fn new(method: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), method)
    }

    /// Create a request context with specific ID
    pub fn with_id(request_id: Uuid, method: impl Into<String>) -> Self {
        Self {
            request_id,
            method: method.into(),
            client_info: None,
            started: Instant::now(),
        }
    }

    /// Set client information
    pub fn with_client_info(mut self, client_info: Option<Implementation>) -> Self {
        self.client_info = client_info;
        self
    }

    /// Client name, or "unknown" before the handshake
    pub fn client_name(&self) -> &str {
        self.client_info
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("unknown")
    }

    /// Milliseconds since the context was created
    pub fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }
}
