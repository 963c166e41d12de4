//! Tests for the KD UI backend

use crate::backend::{KdUiBackend, KdUiConfig, SERVER_NAME};
use crate::error::KdUiError;
use kdui_components::resources::CATALOG;
use kdui_mcp_protocol::*;
use kdui_mcp_server::McpBackend;
use serde_json::json;

fn backend() -> KdUiBackend {
    KdUiBackend::new(KdUiConfig::deterministic())
}

fn call(name: &str, arguments: serde_json::Value) -> CallToolRequestParam {
    CallToolRequestParam {
        name: name.to_string(),
        arguments: Some(arguments),
    }
}

fn text(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1);
    result.content[0].as_text().unwrap()
}

#[tokio::test]
async fn test_initialize_from_config() {
    let backend = KdUiBackend::initialize(KdUiConfig::default()).await.unwrap();
    let info = backend.get_server_info();
    assert_eq!(info.server_info.name, SERVER_NAME);
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_some());
    assert!(info.instructions.is_some());
}

#[test]
fn test_run_tool_outside_runtime() {
    let backend = backend();
    let markup = backend
        .run_tool("add_component", &json!({"component_type": "progress", "config": {"value": 65, "show_label": true}}))
        .unwrap();
    assert!(markup.contains("65%"));

    let listed = tokio_test::block_on(backend.list_tools(PaginatedRequestParam { cursor: None })).unwrap();
    assert_eq!(listed.tools.len(), 5);
}

#[test]
fn test_server_config_uses_stdio() {
    let config = backend().server_config();
    assert_eq!(config.server_info.server_info.name, "kd-ui");
    assert!(matches!(
        config.transport_config,
        kdui_mcp_server::TransportConfig::Stdio(_)
    ));
}

#[tokio::test]
async fn test_list_tools() {
    let result = backend()
        .list_tools(PaginatedRequestParam { cursor: None })
        .await
        .unwrap();
    let names: Vec<&str> = result.tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "create_dashboard",
            "create_form",
            "create_table",
            "add_component",
            "create_landing_page"
        ]
    );
    assert!(result.next_cursor.is_none());
}

#[tokio::test]
async fn test_call_add_component() {
    let result = backend()
        .call_tool(call("add_component", json!({"component_type": "badge", "config": {}})))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(false));
    assert!(text(&result).contains(">Badge</span>"));
}

#[tokio::test]
async fn test_call_add_component_unknown_type_is_placeholder() {
    let result = backend()
        .call_tool(call("add_component", json!({"component_type": "carousel"})))
        .await
        .unwrap();
    assert_eq!(text(&result), "<!-- Unknown component type: carousel -->");
}

#[tokio::test]
async fn test_call_without_arguments_uses_defaults() {
    let result = backend()
        .call_tool(CallToolRequestParam {
            name: "create_form".to_string(),
            arguments: None,
        })
        .await
        .unwrap();
    assert!(text(&result).contains("<form"));
}

#[tokio::test]
async fn test_call_is_deterministic_with_sequential_ids() {
    let backend = backend();
    let args = json!({"components": ["stats", "table"]});
    let first = backend.call_tool(call("create_dashboard", args.clone())).await.unwrap();
    let second = backend.call_tool(call("create_dashboard", args)).await.unwrap();
    assert_eq!(text(&first), text(&second));
    assert!(text(&first).contains("id=\"table-1\""));
}

#[tokio::test]
async fn test_call_unknown_tool() {
    let err = backend()
        .call_tool(call("delete_everything", json!({})))
        .await
        .unwrap_err();
    assert!(matches!(err, KdUiError::UnknownTool(ref name) if name == "delete_everything"));

    let protocol: Error = err.into();
    assert_eq!(protocol.code, ErrorCode::ToolNotFound);
}

#[tokio::test]
async fn test_list_resources_matches_catalog() {
    let result = backend()
        .list_resources(PaginatedRequestParam { cursor: None })
        .await
        .unwrap();
    assert_eq!(result.resources.len(), CATALOG.len());
    let design = result
        .resources
        .iter()
        .find(|r| r.uri == "config://design-system")
        .unwrap();
    assert_eq!(design.mime_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_read_resource() {
    let result = backend()
        .read_resource(ReadResourceRequestParam {
            uri: "template://layouts/base".to_string(),
        })
        .await
        .unwrap();
    let contents = &result.contents[0];
    assert_eq!(contents.uri, "template://layouts/base");
    assert_eq!(contents.mime_type.as_deref(), Some("text/html"));
    assert!(contents.text.as_deref().unwrap().contains("{% block content %}"));
}

#[tokio::test]
async fn test_read_unknown_template_path() {
    let result = backend()
        .read_resource(ReadResourceRequestParam {
            uri: "template://components/carousel".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(
        result.contents[0].text.as_deref(),
        Some("<!-- Template not found: components/carousel -->")
    );
}

#[tokio::test]
async fn test_read_unknown_resource() {
    let err = backend()
        .read_resource(ReadResourceRequestParam {
            uri: "docs://missing".to_string(),
        })
        .await
        .unwrap_err();
    let protocol: Error = err.into();
    assert_eq!(protocol.code, ErrorCode::ResourceNotFound);
    assert!(protocol.message.contains("docs://missing"));
}

#[tokio::test]
async fn test_resource_templates() {
    let result = backend()
        .list_resource_templates(PaginatedRequestParam { cursor: None })
        .await
        .unwrap();
    assert_eq!(result.resource_templates.len(), 1);
    assert_eq!(result.resource_templates[0].uri_template, "template://{path}");
}
