//! Tests for generic request handler functionality

use crate::backend::{BackendError, McpBackend};
use crate::handler::{GenericServerHandler, HandlerError};
use async_trait::async_trait;
use kdui_mcp_protocol::*;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// Mock backend for testing
#[derive(Clone, Default)]
struct MockHandlerBackend {
    connects: Arc<AtomicUsize>,
}

#[async_trait]
impl McpBackend for MockHandlerBackend {
    type Error = BackendError;
    type Config = ();

    async fn initialize(_: Self::Config) -> std::result::Result<Self, Self::Error> {
        Ok(Self::default())
    }

    fn get_server_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "mock".to_string(),
                version: "1.0.0".to_string(),
            },
            instructions: None,
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
    ) -> std::result::Result<ListToolsResult, Self::Error> {
        Ok(ListToolsResult {
            tools: vec![Tool {
                name: "echo".to_string(),
                description: "Echo a message".to_string(),
                input_schema: json!({"type": "object"}),
            }],
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
    ) -> std::result::Result<CallToolResult, Self::Error> {
        match request.name.as_str() {
            "echo" => {
                let message = request
                    .arguments
                    .as_ref()
                    .and_then(|a| a.get("message"))
                    .and_then(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string();
                Ok(CallToolResult::text(message))
            }
            other => Err(BackendError::tool_not_found(other)),
        }
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
    ) -> std::result::Result<ReadResourceResult, Self::Error> {
        if request.uri == "docs://hello" {
            Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(request.uri, "text/markdown", "# Hello")],
            })
        } else {
            Err(BackendError::resource_not_found(request.uri))
        }
    }

    async fn on_client_connect(
        &self,
        _client_info: &Implementation,
    ) -> std::result::Result<(), Self::Error> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn handler() -> (GenericServerHandler<MockHandlerBackend>, MockHandlerBackend) {
    let backend = MockHandlerBackend::default();
    (GenericServerHandler::new(Arc::new(backend.clone())), backend)
}

fn request(method: &str, params: serde_json::Value) -> Request {
    Request::new(method, params, json!(1))
}

#[tokio::test]
async fn test_initialize_negotiates_and_records_client() {
    let (handler, backend) = handler();

    let response = handler
        .handle_request(request(
            "initialize",
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "cline", "version": "3.0.0"}
            }),
        ))
        .await;

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "mock");
    assert_eq!(result["instructions"], "");
    assert!(result["capabilities"]["tools"].is_object());
    assert_eq!(backend.connects.load(Ordering::SeqCst), 1);
    assert_eq!(handler.client_info().await.unwrap().name, "cline");
}

#[tokio::test]
async fn test_initialize_with_unknown_version_falls_back() {
    let (handler, _) = handler();

    let response = handler
        .handle_request(request(
            "initialize",
            json!({
                "protocolVersion": "1999-12-31",
                "clientInfo": {"name": "old", "version": "0"}
            }),
        ))
        .await;

    assert_eq!(response.result.unwrap()["protocolVersion"], MCP_VERSION);
}

#[tokio::test]
async fn test_initialize_without_client_info_is_invalid_params() {
    let (handler, _) = handler();

    let response = handler
        .handle_request(request("initialize", json!({"protocolVersion": MCP_VERSION})))
        .await;

    assert_eq!(response.error.unwrap().code, ErrorCode::InvalidParams);
}

#[tokio::test]
async fn test_ping_returns_empty_object() {
    let (handler, _) = handler();
    let response = handler.handle_request(request("ping", json!(null))).await;
    assert_eq!(response.result, Some(json!({})));
    assert_eq!(response.id, json!(1));
}

#[tokio::test]
async fn test_list_tools_accepts_missing_params() {
    let (handler, _) = handler();
    let response = handler
        .handle_request(request("tools/list", serde_json::Value::Null))
        .await;
    assert_eq!(response.result.unwrap()["tools"][0]["name"], "echo");
}

#[tokio::test]
async fn test_call_tool_success() {
    let (handler, _) = handler();
    let response = handler
        .handle_request(request(
            "tools/call",
            json!({"name": "echo", "arguments": {"message": "hi"}}),
        ))
        .await;

    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["text"], "hi");
    assert_eq!(result["isError"], false);
}

#[tokio::test]
async fn test_call_unknown_tool_is_tool_not_found() {
    let (handler, _) = handler();
    let response = handler
        .handle_request(request("tools/call", json!({"name": "nope"})))
        .await;

    let error = response.error.unwrap();
    assert_eq!(error.code, ErrorCode::ToolNotFound);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_read_resource_and_missing_resource() {
    let (handler, _) = handler();

    let found = handler
        .handle_request(request("resources/read", json!({"uri": "docs://hello"})))
        .await;
    assert_eq!(found.result.unwrap()["contents"][0]["text"], "# Hello");

    let missing = handler
        .handle_request(request("resources/read", json!({"uri": "docs://nope"})))
        .await;
    assert_eq!(missing.error.unwrap().code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_default_resource_listing_is_empty() {
    let (handler, _) = handler();

    let resources = handler
        .handle_request(request("resources/list", json!({})))
        .await;
    assert_eq!(resources.result.unwrap()["resources"], json!([]));

    let templates = handler
        .handle_request(request("resources/templates/list", json!(null)))
        .await;
    assert_eq!(templates.result.unwrap()["resourceTemplates"], json!([]));
}

#[tokio::test]
async fn test_unknown_method() {
    let (handler, _) = handler();
    let response = handler
        .handle_request(request("prompts/list", json!({})))
        .await;
    let error = response.error.unwrap();
    assert_eq!(error.code, ErrorCode::MethodNotFound);
    assert!(error.message.contains("prompts/list"));
}

#[tokio::test]
async fn test_notification_is_acknowledged_silently() {
    let (handler, _) = handler();
    let response = handler
        .handle_request(Request::new(
            "notifications/initialized",
            json!({}),
            serde_json::Value::Null,
        ))
        .await;
    assert!(response.error.is_none());
    assert!(response.id.is_null());
}

#[test]
fn test_handler_error_conversion() {
    let backend: Error = HandlerError::Backend("boom".to_string()).into();
    assert_eq!(backend.code, ErrorCode::InternalError);

    let protocol: Error = HandlerError::Protocol(Error::invalid_params("bad")).into();
    assert_eq!(protocol.code, ErrorCode::InvalidParams);
}
