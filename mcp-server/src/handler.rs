//! Generic request handler for MCP protocol

use crate::{backend::McpBackend, context::RequestContext};
use kdui_mcp_protocol::*;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// Error type for handler operations
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The backend failed while serving the request
    #[error("Backend error: {0}")]
    Backend(String),

    /// The request itself was at fault
    #[error("Protocol error: {0}")]
    Protocol(#[from] Error),
}

/// Convert HandlerError to protocol Error
impl From<HandlerError> for Error {
    fn from(err: HandlerError) -> Self {
        match err {
            HandlerError::Backend(msg) => Error::internal_error(msg),
            HandlerError::Protocol(e) => e,
        }
    }
}

/// Generic server handler that implements the MCP protocol
#[derive(Clone)]
pub struct GenericServerHandler<B: McpBackend> {
    backend: Arc<B>,
    client_info: Arc<RwLock<Option<Implementation>>>,
}

impl<B: McpBackend> GenericServerHandler<B> {
    /// Create a new handler
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            client_info: Arc::new(RwLock::new(None)),
        }
    }

    /// Client recorded by the last `initialize`
    pub async fn client_info(&self) -> Option<Implementation> {
        self.client_info.read().await.clone()
    }

    /// Handle one MCP request and produce its response.
    ///
    /// Notifications also get a response value; the transport drops it because
    /// the id is null.
    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn handle_request(&self, request: Request) -> Response {
        let context = RequestContext::new(request.method.clone())
            .with_client_info(self.client_info().await);
        debug!(request_id = %context.request_id, client = context.client_name(), "Handling request");

        let id = request.id.clone();
        let response = match self.dispatch(request).await {
            Ok(result) => Response::success(id, result),
            Err(error) => {
                let error: Error = error.into();
                warn!(code = %error.code, "Request failed: {}", error.message);
                Response::failure(id, error)
            }
        };

        debug!(elapsed_ms = context.elapsed_ms() as u64, "Request handled");
        response
    }

    async fn dispatch(&self, request: Request) -> std::result::Result<serde_json::Value, HandlerError> {
        if request.method.starts_with("notifications/") {
            debug!("Received notification {}", request.method);
            return Ok(serde_json::Value::Null);
        }

        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.params).await,
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => {
                let params = parse_params_or_default(request.params)?;
                let result = self.backend.list_tools(params).await.map_err(into_handler)?;
                to_value(result)
            }
            "tools/call" => {
                let params: CallToolRequestParam = parse_params(request.params)?;
                debug!(tool = %params.name, "Calling tool");
                let result = self.backend.call_tool(params).await.map_err(into_handler)?;
                to_value(result)
            }
            "resources/list" => {
                let params = parse_params_or_default(request.params)?;
                let result = self
                    .backend
                    .list_resources(params)
                    .await
                    .map_err(into_handler)?;
                to_value(result)
            }
            "resources/read" => {
                let params: ReadResourceRequestParam = parse_params(request.params)?;
                let result = self
                    .backend
                    .read_resource(params)
                    .await
                    .map_err(into_handler)?;
                to_value(result)
            }
            "resources/templates/list" => {
                let params = parse_params_or_default(request.params)?;
                let result = self
                    .backend
                    .list_resource_templates(params)
                    .await
                    .map_err(into_handler)?;
                to_value(result)
            }
            other => Err(Error::method_not_found(other).into()),
        }
    }

    async fn handle_initialize(
        &self,
        params: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, HandlerError> {
        let params: InitializeRequestParam = parse_params(params)?;
        let negotiated = negotiate_protocol_version(&params.protocol_version);
        info!(
            client = %params.client_info.name,
            client_version = %params.client_info.version,
            requested = %params.protocol_version,
            negotiated,
            "Client initializing"
        );

        self.backend
            .on_client_connect(&params.client_info)
            .await
            .map_err(into_handler)?;
        *self.client_info.write().await = Some(params.client_info);

        let server_info = self.backend.get_server_info();
        to_value(InitializeResult {
            protocol_version: negotiated.to_string(),
            capabilities: server_info.capabilities,
            server_info: server_info.server_info,
            // Some clients reject a null here
            instructions: Some(server_info.instructions.unwrap_or_default()),
        })
    }
}

fn into_handler<E: Into<Error>>(error: E) -> HandlerError {
    HandlerError::Protocol(error.into())
}

fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> std::result::Result<T, HandlerError> {
    serde_json::from_value(params)
        .map_err(|e| HandlerError::Protocol(Error::invalid_params(e.to_string())))
}

fn parse_params_or_default<T: DeserializeOwned + Default>(
    params: serde_json::Value,
) -> std::result::Result<T, HandlerError> {
    if params.is_null() {
        Ok(T::default())
    } else {
        parse_params(params)
    }
}

fn to_value<T: serde::Serialize>(value: T) -> std::result::Result<serde_json::Value, HandlerError> {
    serde_json::to_value(value).map_err(|e| HandlerError::Backend(e.to_string()))
}
