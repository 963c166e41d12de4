//! Unit tests for MCP protocol model types

#[cfg(test)]
mod tests {
    use super::super::model::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = Request::new("tools/list", json!({"cursor": null}), json!(1));

        let serialized = serde_json::to_string(&request).unwrap();
        let deserialized: Request = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.jsonrpc, "2.0");
        assert_eq!(deserialized.method, "tools/list");
        assert_eq!(deserialized.id, json!(1));
        assert!(!deserialized.is_notification());
    }

    #[test]
    fn test_notification_has_null_id() {
        let request: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .unwrap();
        assert!(request.is_notification());
        assert!(request.params.is_null());
    }

    #[test]
    fn test_response_with_result() {
        let response = Response::success(json!(1), json!({"tools": []}));

        let serialized = serde_json::to_string(&response).unwrap();
        assert!(serialized.contains("\"result\""));
        assert!(!serialized.contains("\"error\""));
    }

    #[test]
    fn test_response_with_error() {
        use crate::Error;

        let response = Response::failure(json!(7), Error::method_not_found("unknown_method"));

        let serialized = serde_json::to_string(&response).unwrap();
        assert!(!serialized.contains("\"result\""));
        assert!(serialized.contains("\"error\""));
        assert!(serialized.contains("Method not found"));
    }

    #[test]
    fn test_protocol_version_display() {
        assert_eq!(ProtocolVersion::default().to_string(), "2025-06-18");
        let version = ProtocolVersion {
            major: 2024,
            minor: 11,
            patch: 5,
        };
        assert_eq!(version.to_string(), "2024-11-05");
    }

    #[test]
    fn test_server_capabilities_builder() {
        let capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_resources()
            .build();

        let value = serde_json::to_value(&capabilities).unwrap();
        assert_eq!(value["tools"]["listChanged"], json!(false));
        assert_eq!(value["resources"]["subscribe"], json!(false));
    }

    #[test]
    fn test_empty_capabilities_serialize_empty() {
        let value = serde_json::to_value(ServerCapabilities::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_tool_uses_camel_case_schema() {
        let tool = Tool {
            name: "create_table".to_string(),
            description: "Render a data table".to_string(),
            input_schema: json!({"type": "object"}),
        };
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["inputSchema"]["type"], "object");
    }

    #[test]
    fn test_call_tool_result_helpers() {
        let ok = CallToolResult::text("<div></div>");
        assert_eq!(ok.is_error, Some(false));
        assert_eq!(ok.content[0].as_text(), Some("<div></div>"));

        let failed = CallToolResult::error_text("boom");
        assert_eq!(failed.is_error, Some(true));

        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["isError"], json!(false));
        assert_eq!(value["content"][0]["type"], "text");
    }

    #[test]
    fn test_content_resource_is_not_text() {
        let content = Content::resource("docs://anti-patterns", None);
        assert!(content.as_text().is_none());
    }

    #[test]
    fn test_call_tool_params_without_arguments() {
        let params: CallToolRequestParam =
            serde_json::from_value(json!({"name": "create_dashboard"})).unwrap();
        assert_eq!(params.name, "create_dashboard");
        assert!(params.arguments.is_none());
    }

    #[test]
    fn test_resource_contents_text() {
        let contents = ResourceContents::text("config://design-system", "application/json", "{}");
        let value = serde_json::to_value(&contents).unwrap();
        assert_eq!(value["mimeType"], "application/json");
        assert!(value.get("blob").is_none());
    }

    #[test]
    fn test_initialize_round_trip() {
        let params: InitializeRequestParam = serde_json::from_value(json!({
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": {"name": "inspector", "version": "0.1.0"}
        }))
        .unwrap();
        assert_eq!(params.client_info.name, "inspector");

        let result = InitializeResult {
            protocol_version: params.protocol_version,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "kd-ui".to_string(),
                version: "0.4.0".to_string(),
            },
            instructions: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["protocolVersion"], "2025-03-26");
        assert_eq!(value["serverInfo"]["name"], "kd-ui");
    }

    #[test]
    fn test_resource_templates_field_names() {
        let result = ListResourceTemplatesResult {
            resource_templates: vec![ResourceTemplate {
                uri_template: "template://{path}".to_string(),
                name: "Templates".to_string(),
                description: None,
                mime_type: Some("text/html".to_string()),
            }],
            next_cursor: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value["resourceTemplates"][0]["uriTemplate"],
            "template://{path}"
        );
        assert!(value.get("nextCursor").is_none());
    }
}
