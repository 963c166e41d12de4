//! Generic MCP server implementation

use crate::{backend::McpBackend, handler::GenericServerHandler};
use kdui_mcp_protocol::*;
use kdui_mcp_transport::{RequestHandler, Transport, TransportConfig};

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::signal;
use tracing::{error, info, warn};

/// Error type for server operations
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid server configuration
    #[error("Server configuration error: {0}")]
    Configuration(String),

    /// The transport failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// A backend lifecycle hook failed
    #[error("Backend error: {0}")]
    Backend(String),

    /// `run` called twice
    #[error("Server already running")]
    AlreadyRunning,

    /// Backend shutdown hook overran its budget
    #[error("Shutdown timeout")]
    ShutdownTimeout,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server implementation information
    pub server_info: ServerInfo,

    /// Transport configuration
    pub transport_config: TransportConfig,

    /// Stop on Ctrl+C instead of waiting for stdin to close
    pub graceful_shutdown: bool,

    /// Budget for the backend shutdown hook
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_info: ServerInfo {
                protocol_version: ProtocolVersion::default(),
                capabilities: ServerCapabilities::default(),
                server_info: Implementation {
                    name: "MCP Server".to_string(),
                    version: "1.0.0".to_string(),
                },
                instructions: None,
            },
            transport_config: TransportConfig::default(),
            graceful_shutdown: true,
            shutdown_timeout_secs: 30,
        }
    }
}

/// Health status information
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthStatus {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Per-component health
    pub components: std::collections::HashMap<String, bool>,
}

/// Generic MCP server with pluggable backend
pub struct McpServer<B: McpBackend> {
    backend: Arc<B>,
    handler: GenericServerHandler<B>,
    transport: Box<dyn Transport>,
    config: ServerConfig,
    running: bool,
}

impl<B: McpBackend + 'static> McpServer<B> {
    /// Create a new MCP server with the given backend and configuration
    pub fn new(backend: B, config: ServerConfig) -> std::result::Result<Self, ServerError> {
        info!(
            server = %config.server_info.server_info.name,
            "Initializing MCP server"
        );

        let transport = kdui_mcp_transport::create_transport(config.transport_config.clone())
            .map_err(|e| ServerError::Transport(e.to_string()))?;

        let backend = Arc::new(backend);
        let handler = GenericServerHandler::new(backend.clone());

        Ok(Self {
            backend,
            handler,
            transport,
            config,
            running: false,
        })
    }

    /// Request handler, for driving the server without a transport
    pub fn handler(&self) -> &GenericServerHandler<B> {
        &self.handler
    }

    /// Get server information
    pub fn get_server_info(&self) -> &ServerInfo {
        &self.config.server_info
    }

    /// Serve until the client closes the stream or Ctrl+C arrives
    pub async fn run(&mut self) -> std::result::Result<(), ServerError> {
        if self.running {
            return Err(ServerError::AlreadyRunning);
        }
        self.running = true;

        self.backend
            .on_startup()
            .await
            .map_err(|e| ServerError::Backend(e.to_string()))?;

        info!("MCP server started");
        let request_handler = self.request_handler();

        let served = if self.config.graceful_shutdown {
            tokio::select! {
                result = self.transport.start(request_handler) => result,
                signal = signal::ctrl_c() => {
                    match signal {
                        Ok(()) => warn!("Shutdown signal received"),
                        Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
                    }
                    Ok(())
                }
            }
        } else {
            self.transport.start(request_handler).await
        };

        let stopped = self.stop().await;
        served.map_err(|e| ServerError::Transport(e.to_string()))?;
        stopped
    }

    async fn stop(&mut self) -> std::result::Result<(), ServerError> {
        info!("Stopping MCP server");
        self.running = false;

        if let Err(e) = self.transport.stop().await {
            warn!("Transport did not stop cleanly: {}", e);
        }

        let budget = Duration::from_secs(self.config.shutdown_timeout_secs);
        match tokio::time::timeout(budget, self.backend.on_shutdown()).await {
            Ok(Ok(())) => {
                info!("MCP server stopped");
                Ok(())
            }
            Ok(Err(e)) => Err(ServerError::Backend(e.to_string())),
            Err(_) => Err(ServerError::ShutdownTimeout),
        }
    }

    /// Get server health status
    pub async fn health_check(&self) -> HealthStatus {
        let backend_healthy = self.backend.health_check().await.is_ok();
        let transport_healthy = self.transport.health_check().await.is_ok();

        HealthStatus {
            status: if backend_healthy && transport_healthy {
                "healthy".to_string()
            } else {
                "unhealthy".to_string()
            },
            components: [
                ("backend".to_string(), backend_healthy),
                ("transport".to_string(), transport_healthy),
            ]
            .into_iter()
            .collect(),
        }
    }

    fn request_handler(&self) -> RequestHandler {
        let handler = self.handler.clone();
        Box::new(move |request| {
            let handler = handler.clone();
            Box::pin(async move { handler.handle_request(request).await })
        })
    }
}
