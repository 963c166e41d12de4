//! End-to-end scenarios over the JSON-RPC handler

use crate::test_utils::*;
use kdui_mcp_protocol::*;
use serde_json::{Value, json};

#[tokio::test]
async fn test_initialize_handshake() {
    let handler = test_handler();
    let result = initialize(&handler).await.unwrap();

    assert_eq!(result["serverInfo"]["name"], "kd-ui");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
    assert!(result["protocolVersion"].is_string());

    let pong: Value = call(&handler, "ping", json!({})).await.unwrap();
    assert_eq!(pong, json!({}));
}

#[tokio::test]
async fn test_tool_listing() {
    let handler = test_handler();
    initialize(&handler).await.unwrap();

    let tools: ListToolsResult = call(&handler, "tools/list", json!({})).await.unwrap();
    let names: Vec<&str> = tools.tools.iter().map(|t| t.name.as_str()).collect();
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
}

#[tokio::test]
async fn test_every_tool_produces_markup() {
    let handler = test_handler();
    initialize(&handler).await.unwrap();

    let dashboard = tool_text(
        &handler,
        "create_dashboard",
        json!({"layout": "topnav", "title": "Ops", "components": ["table", "stats"]}),
    )
    .await
    .unwrap();
    assert!(dashboard.starts_with("{% extends \"base.html\" %}"));
    assert!(dashboard.contains("{% for row in transactions %}"));

    let form = tool_text(&handler, "create_form", json!({"form_type": "contact"}))
        .await
        .unwrap();
    assert!(form.contains("<form"));
    assert!(form.contains("<textarea"));

    let table = tool_text(
        &handler,
        "create_table",
        json!({
            "columns": [{"name": "name"}, {"name": "score", "type": "number"}],
            "rows": [{"name": "Ada", "score": 3}, {"name": "Linus", "score": 9}]
        }),
    )
    .await
    .unwrap();
    assert!(table.contains("Ada"));
    assert!(table.contains("Linus"));
    assert!(!table.contains("{% for row in"));

    let badge = tool_text(
        &handler,
        "add_component",
        json!({"component_type": "badge", "config": {"text": "Beta", "variant": "success"}}),
    )
    .await
    .unwrap();
    assert!(badge.contains("badge-success"));
    assert!(badge.contains(">Beta</span>"));

    let landing = tool_text(&handler, "create_landing_page", json!({"company_name": "Acme"}))
        .await
        .unwrap();
    assert!(landing.starts_with("<!DOCTYPE html>"));
    assert!(landing.contains("Acme"));
}

#[tokio::test]
async fn test_unknown_component_is_not_an_error() {
    let handler = test_handler();
    let text = tool_text(&handler, "add_component", json!({"component_type": "carousel"}))
        .await
        .unwrap();
    assert_eq!(text, "<!-- Unknown component type: carousel -->");
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let handler = test_handler();
    let args = json!({"components": ["stats", "charts", "filters", "table"]});
    let first = tool_text(&handler, "create_dashboard", args.clone()).await.unwrap();
    let second = tool_text(&handler, "create_dashboard", args).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_resources_workflow() {
    let handler = test_handler();
    initialize(&handler).await.unwrap();

    let listed: ListResourcesResult = call(&handler, "resources/list", json!({})).await.unwrap();
    assert_eq!(listed.resources.len(), 11);

    for resource in &listed.resources {
        let read: ReadResourceResult = call(&handler, "resources/read", json!({"uri": resource.uri}))
            .await
            .unwrap();
        let contents = &read.contents[0];
        assert_eq!(contents.uri, resource.uri);
        assert_eq!(contents.mime_type, resource.mime_type);
        assert!(!contents.text.as_deref().unwrap().is_empty(), "{}", resource.uri);
    }

    let design: ReadResourceResult =
        call(&handler, "resources/read", json!({"uri": "config://design-system"}))
            .await
            .unwrap();
    let tokens: Value = serde_json::from_str(design.contents[0].text.as_deref().unwrap()).unwrap();
    assert_eq!(tokens["colors"]["primary"]["600"], "#2563eb");

    let templates: ListResourceTemplatesResult =
        call(&handler, "resources/templates/list", json!({})).await.unwrap();
    assert_eq!(templates.resource_templates[0].uri_template, "template://{path}");
}

#[tokio::test]
async fn test_error_responses() {
    let handler = test_handler();

    let response = send(&handler, "tools/call", json!({"name": "no_such_tool"})).await;
    assert!(response.result.is_none());
    let wire = serde_json::to_value(&response).unwrap();
    assert_eq!(wire["error"]["code"], -32003);
    assert_eq!(wire["id"], "tools/call");

    let response = send(&handler, "resources/read", json!({"uri": "docs://nope"})).await;
    assert_eq!(response.error.unwrap().code, ErrorCode::ResourceNotFound);

    let response = send(&handler, "prompts/list", json!({})).await;
    assert_eq!(response.error.unwrap().code, ErrorCode::MethodNotFound);

    let response = send(&handler, "tools/call", json!({"arguments": {}})).await;
    assert_eq!(response.error.unwrap().code, ErrorCode::InvalidParams);
}

#[test]
fn test_handler_on_blocking_executor() {
    let handler = test_handler();
    let text = tokio_test::block_on(tool_text(
        &handler,
        "add_component",
        json!({"component_type": "theme_toggle"}),
    ))
    .unwrap();
    assert!(text.contains("data-theme-toggle"));
    assert!(text.contains("window.KDTheme"));
}
