//! Tests for tool definitions and dispatch

use crate::error::KdUiError;
use crate::tools::{ToolName, definitions, render_target};
use kdui_components::{ComponentType, TemplateRegistry};
use serde_json::json;

#[test]
fn test_parse_round_trip() {
    for tool in ToolName::ALL {
        assert_eq!(ToolName::parse(tool.as_str()), Some(tool));
    }
    assert_eq!(ToolName::parse("Create_Table"), None);
    assert_eq!(ToolName::parse("table"), None);
}

#[test]
fn test_parse_loose_short_names() {
    assert_eq!(ToolName::parse_loose("table"), Some(ToolName::CreateTable));
    assert_eq!(ToolName::parse_loose("landing_page"), Some(ToolName::CreateLandingPage));
    assert_eq!(ToolName::parse_loose("create_form"), Some(ToolName::CreateForm));
    assert_eq!(ToolName::parse_loose("component"), None);
}

#[test]
fn test_definitions_have_object_schemas() {
    let tools = definitions();
    assert_eq!(tools.len(), 5);
    for tool in &tools {
        assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
        assert!(!tool.description.is_empty());
    }
}

#[test]
fn test_add_component_lists_every_type() {
    let tool = ToolName::AddComponent.definition();
    let names = tool.input_schema["properties"]["component_type"]["enum"]
        .as_array()
        .unwrap();
    assert_eq!(names.len(), ComponentType::ALL.len());
    for ty in ComponentType::ALL {
        assert!(tool.description.contains(&format!("- {}: ", ty.as_str())));
    }
    assert_eq!(tool.input_schema["required"], json!(["component_type"]));
}

#[test]
fn test_add_component_missing_type_is_placeholder() {
    let registry = TemplateRegistry::deterministic();
    let html = ToolName::AddComponent.run(&registry, &json!({"config": {"text": "x"}}));
    assert_eq!(html, "<!-- Unknown component type:  -->");
}

#[test]
fn test_add_component_passes_config() {
    let registry = TemplateRegistry::deterministic();
    let html = ToolName::AddComponent.run(
        &registry,
        &json!({"component_type": "badge", "config": {"text": "Beta"}}),
    );
    assert!(html.contains(">Beta</span>"));
}

#[test]
fn test_each_run_starts_fresh_ids() {
    let registry = TemplateRegistry::deterministic();
    let args = json!({"component_type": "modal"});
    let first = ToolName::AddComponent.run(&registry, &args);
    let second = ToolName::AddComponent.run(&registry, &args);
    assert_eq!(first, second);
    assert!(first.contains("modal-1"));
}

#[test]
fn test_render_target_component_and_tool() {
    let registry = TemplateRegistry::deterministic();
    let badge = render_target(&registry, "badge", "{}").unwrap();
    assert!(badge.contains(">Badge</span>"));

    let table = render_target(&registry, "table", r#"{"data_var": "users"}"#).unwrap();
    assert!(table.contains("{% for row in users %}"));

    let unknown = render_target(&registry, "carousel", "{}").unwrap();
    assert_eq!(unknown, "<!-- Unknown component type: carousel -->");
}

#[test]
fn test_render_target_rejects_bad_json() {
    let registry = TemplateRegistry::deterministic();
    let err = render_target(&registry, "badge", "{not json").unwrap_err();
    assert!(matches!(err, KdUiError::InvalidConfig(_)));
}
