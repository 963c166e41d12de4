//! Backend trait for pluggable MCP implementations

use async_trait::async_trait;
use kdui_mcp_protocol::*;
use std::error::Error as StdError;
use thiserror::Error;

/// Error type for backend operations
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend used before `initialize` completed
    #[error("Backend not initialized")]
    NotInitialized,

    /// Bad backend configuration or call arguments
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested tool does not exist
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// The requested resource does not exist
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The operation is not offered by this backend
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// Anything else
    #[error("Internal backend error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Unknown tool
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound(name.into())
    }

    /// Unknown resource
    pub fn resource_not_found(uri: impl Into<String>) -> Self {
        Self::ResourceNotFound(uri.into())
    }

    /// Unsupported operation
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }

    /// Internal failure
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Convert BackendError to MCP protocol Error
impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotInitialized => Error::internal_error("Backend not initialized"),
            BackendError::Configuration(msg) => Error::invalid_params(msg),
            BackendError::ToolNotFound(name) => Error::tool_not_found(name),
            BackendError::ResourceNotFound(uri) => Error::resource_not_found(uri),
            BackendError::NotSupported(msg) => Error::method_not_found(msg),
            BackendError::Internal(msg) => Error::internal_error(msg),
        }
    }
}

/// Main trait for MCP backend implementations
///
/// A backend supplies the domain: its tools and its resources. The framework
/// handles the handshake, routing, and transport around it.
#[async_trait]
pub trait McpBackend: Send + Sync + Clone {
    /// Backend-specific error type
    type Error: StdError + Send + Sync + Into<Error> + From<BackendError> + 'static;

    /// Backend configuration type
    type Config: Clone + Send + Sync;

    /// Build the backend from its configuration
    async fn initialize(config: Self::Config) -> std::result::Result<Self, Self::Error>;

    /// Server information and capabilities
    fn get_server_info(&self) -> ServerInfo;

    /// Verify the backend can serve requests
    async fn health_check(&self) -> std::result::Result<(), Self::Error> {
        Ok(())
    }

    // Tool Management

    /// List available tools
    async fn list_tools(
        &self,
        request: PaginatedRequestParam,
    ) -> std::result::Result<ListToolsResult, Self::Error>;

    /// Execute a tool with the given parameters
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
    ) -> std::result::Result<CallToolResult, Self::Error>;

    // Resource Management

    /// List available resources
    async fn list_resources(
        &self,
        request: PaginatedRequestParam,
    ) -> std::result::Result<ListResourcesResult, Self::Error> {
        let _ = request;
        Ok(ListResourcesResult {
            resources: vec![],
            next_cursor: None,
        })
    }

    /// Read a resource by URI
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
    ) -> std::result::Result<ReadResourceResult, Self::Error> {
        Err(BackendError::resource_not_found(request.uri).into())
    }

    /// List resource templates
    async fn list_resource_templates(
        &self,
        request: PaginatedRequestParam,
    ) -> std::result::Result<ListResourceTemplatesResult, Self::Error> {
        let _ = request;
        Ok(ListResourceTemplatesResult {
            resource_templates: vec![],
            next_cursor: None,
        })
    }

    // Lifecycle hooks

    /// Called when the server is starting up
    async fn on_startup(&self) -> std::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Called when the server is shutting down
    async fn on_shutdown(&self) -> std::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Called once the client has identified itself in `initialize`
    async fn on_client_connect(
        &self,
        client_info: &Implementation,
    ) -> std::result::Result<(), Self::Error> {
        let _ = client_info;
        Ok(())
    }
}
