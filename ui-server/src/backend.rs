//! MCP backend serving KD UI tools and resources

use crate::error::KdUiError;
use crate::tools::{ToolName, definitions};
use async_trait::async_trait;
use kdui_components::resources::{self, CATALOG, TEMPLATE_URI_TEMPLATE};
use kdui_components::{IdStrategy, TemplateRegistry};
use kdui_mcp_protocol::*;
use kdui_mcp_server::{McpBackend, ServerConfig, TransportConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Server name reported in `initialize`
pub const SERVER_NAME: &str = "kd-ui";

/// Backend configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdUiConfig {
    /// How element ids are generated for each tool call
    pub id_strategy: IdStrategy,
}

impl KdUiConfig {
    /// Sequential ids, so identical calls produce identical markup
    pub fn deterministic() -> Self {
        Self {
            id_strategy: IdStrategy::Sequential,
        }
    }
}

/// KD UI backend
#[derive(Debug, Clone)]
pub struct KdUiBackend {
    registry: TemplateRegistry,
}

impl KdUiBackend {
    /// Backend with the given configuration
    pub fn new(config: KdUiConfig) -> Self {
        Self {
            registry: TemplateRegistry::new(config.id_strategy),
        }
    }

    /// Component registry used by the tools
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Server configuration for serving this backend over stdio
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            server_info: self.get_server_info(),
            transport_config: TransportConfig::stdio(),
            ..ServerConfig::default()
        }
    }

    /// Run a tool by name
    pub fn run_tool(&self, name: &str, args: &Value) -> std::result::Result<String, KdUiError> {
        let tool = ToolName::parse(name).ok_or_else(|| KdUiError::UnknownTool(name.to_string()))?;
        Ok(tool.run(&self.registry, args))
    }
}

#[async_trait]
impl McpBackend for KdUiBackend {
    type Error = KdUiError;
    type Config = KdUiConfig;

    async fn initialize(config: Self::Config) -> std::result::Result<Self, Self::Error> {
        info!(id_strategy = ?config.id_strategy, "Initializing KD UI backend");
        Ok(Self::new(config))
    }

    fn get_server_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Generates DaisyUI/Tailwind markup for Flask templates. Use add_component for single \
                 components, create_table, create_form and create_dashboard for larger pieces, and \
                 read docs:// resources for design guidance."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
    ) -> std::result::Result<ListToolsResult, Self::Error> {
        Ok(ListToolsResult {
            tools: definitions(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
    ) -> std::result::Result<CallToolResult, Self::Error> {
        let args = request.arguments.unwrap_or(Value::Null);
        let markup = self.run_tool(&request.name, &args).inspect_err(|_| {
            warn!(tool = %request.name, "Unknown tool requested");
        })?;
        debug!(tool = %request.name, bytes = markup.len(), "Tool produced markup");
        Ok(CallToolResult::text(markup))
    }

    async fn list_resources(
        &self,
        _request: PaginatedRequestParam,
    ) -> std::result::Result<ListResourcesResult, Self::Error> {
        Ok(ListResourcesResult {
            resources: CATALOG
                .iter()
                .map(|entry| Resource {
                    uri: entry.uri.to_string(),
                    name: entry.name.to_string(),
                    description: Some(entry.description.to_string()),
                    mime_type: Some(entry.mime_type.to_string()),
                })
                .collect(),
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
    ) -> std::result::Result<ReadResourceResult, Self::Error> {
        let (text, mime_type) = resources::read(&request.uri)
            .ok_or_else(|| KdUiError::ResourceNotFound(request.uri.clone()))?;
        debug!(uri = %request.uri, "Serving resource");
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(request.uri, mime_type, text)],
        })
    }

    async fn list_resource_templates(
        &self,
        _request: PaginatedRequestParam,
    ) -> std::result::Result<ListResourceTemplatesResult, Self::Error> {
        Ok(ListResourceTemplatesResult {
            resource_templates: vec![ResourceTemplate {
                uri_template: TEMPLATE_URI_TEMPLATE.to_string(),
                name: "Page Templates".to_string(),
                description: Some(
                    "Jinja layouts and component templates by path, e.g. layouts/base".to_string(),
                ),
                mime_type: Some("text/html".to_string()),
            }],
            next_cursor: None,
        })
    }

    async fn on_client_connect(
        &self,
        client_info: &Implementation,
    ) -> std::result::Result<(), Self::Error> {
        info!(client = %client_info.name, version = %client_info.version, "Client connected");
        Ok(())
    }
}
