//! Tests for MCP server construction and health

use crate::backend::{BackendError, McpBackend};
use crate::server::{McpServer, ServerConfig, ServerError};
use async_trait::async_trait;
use kdui_mcp_protocol::*;
use kdui_mcp_transport::TransportConfig;
use serde_json::json;

#[derive(Clone)]
struct MockServerBackend {
    healthy: bool,
}

#[async_trait]
impl McpBackend for MockServerBackend {
    type Error = BackendError;
    type Config = bool;

    async fn initialize(healthy: Self::Config) -> std::result::Result<Self, Self::Error> {
        Ok(Self { healthy })
    }

    fn get_server_info(&self) -> ServerInfo {
        ServerConfig::default().server_info
    }

    async fn health_check(&self) -> std::result::Result<(), Self::Error> {
        if self.healthy {
            Ok(())
        } else {
            Err(BackendError::internal("unhealthy"))
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
    ) -> std::result::Result<ListToolsResult, Self::Error> {
        Ok(ListToolsResult {
            tools: vec![],
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
    ) -> std::result::Result<CallToolResult, Self::Error> {
        Err(BackendError::tool_not_found(request.name))
    }
}

#[test]
fn test_server_config_default() {
    let config = ServerConfig::default();
    assert_eq!(config.server_info.server_info.name, "MCP Server");
    assert!(config.graceful_shutdown);
    assert_eq!(config.shutdown_timeout_secs, 30);
    assert_eq!(config.transport_config, TransportConfig::default());
}

#[tokio::test]
async fn test_server_creation_and_info() {
    let backend = MockServerBackend::initialize(true).await.unwrap();
    let server = McpServer::new(backend, ServerConfig::default()).unwrap();
    assert_eq!(server.get_server_info().server_info.version, "1.0.0");
}

#[tokio::test]
async fn test_invalid_transport_config_fails_creation() {
    let backend = MockServerBackend::initialize(true).await.unwrap();
    let config = ServerConfig {
        transport_config: TransportConfig::stdio_with_limit(0),
        ..ServerConfig::default()
    };

    let result = McpServer::new(backend, config);
    assert!(matches!(result, Err(ServerError::Transport(_))));
}

#[tokio::test]
async fn test_health_check_reports_components() {
    let backend = MockServerBackend::initialize(false).await.unwrap();
    let server = McpServer::new(backend, ServerConfig::default()).unwrap();

    let health = server.health_check().await;
    assert_eq!(health.status, "unhealthy");
    assert_eq!(health.components.get("backend"), Some(&false));
    // Transport is idle until run()
    assert_eq!(health.components.get("transport"), Some(&false));
}

#[tokio::test]
async fn test_handler_is_reachable_without_transport() {
    let backend = MockServerBackend::initialize(true).await.unwrap();
    let server = McpServer::new(backend, ServerConfig::default()).unwrap();

    let response = server
        .handler()
        .handle_request(Request::new(
            "tools/call",
            json!({"name": "anything"}),
            json!("abc"),
        ))
        .await;

    assert_eq!(response.id, json!("abc"));
    assert_eq!(response.error.unwrap().code, ErrorCode::ToolNotFound);
}

#[test]
fn test_server_error_display() {
    assert_eq!(
        ServerError::AlreadyRunning.to_string(),
        "Server already running"
    );
    assert_eq!(
        ServerError::Transport("closed".to_string()).to_string(),
        "Transport error: closed"
    );
}
