//! Newline-delimited JSON-RPC over standard I/O

use crate::{
    RequestHandler, StdioConfig, Transport, TransportError,
    batch::{JsonRpcMessage, create_error_response, process_batch},
    validation::{extract_id_from_malformed, validate_message_string},
};
use async_trait::async_trait;
use kdui_mcp_protocol::{Error as McpError, Response};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

/// Standard I/O transport
///
/// - one message per line, no embedded newlines
/// - JSON-RPC batches are accepted
/// - malformed frames get an error reply with the id recovered when possible
/// - stdout carries protocol frames only; logs go to stderr
pub struct StdioTransport {
    running: Arc<AtomicBool>,
    config: StdioConfig,
}

impl StdioTransport {
    /// Create a new stdio transport with default configuration
    pub fn new() -> Self {
        Self::with_config(StdioConfig::default())
    }

    /// Create a new stdio transport with custom configuration
    pub fn with_config(config: StdioConfig) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &StdioConfig {
        &self.config
    }

    /// Serve frames from `reader`, writing replies to `writer`, until EOF or stop.
    pub async fn serve<R, W>(
        &self,
        reader: R,
        mut writer: W,
        handler: &RequestHandler,
    ) -> Result<(), TransportError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.running.store(true, Ordering::Relaxed);
        let mut lines = reader.lines();

        while self.running.load(Ordering::Relaxed) {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("EOF reached, stopping stdio transport");
                    break;
                }
                Err(e) => {
                    self.running.store(false, Ordering::Relaxed);
                    error!("Failed to read from stdin: {}", e);
                    return Err(TransportError::Connection(format!("Stdin read error: {e}")));
                }
            };

            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            if let Err(e) = self.process_line(line, handler, &mut writer).await {
                error!("Failed to process line: {}", e);
                if matches!(e, TransportError::Connection(_)) {
                    self.running.store(false, Ordering::Relaxed);
                    return Err(e);
                }
            }
        }

        self.running.store(false, Ordering::Relaxed);
        info!("Stdio transport stopped");
        Ok(())
    }

    async fn process_line<W>(
        &self,
        line: &str,
        handler: &RequestHandler,
        writer: &mut W,
    ) -> Result<(), TransportError>
    where
        W: AsyncWrite + Unpin,
    {
        if self.config.validate_messages {
            if let Err(e) = validate_message_string(line, Some(self.config.max_message_size)) {
                warn!("Message validation failed: {}", e);
                let reply = create_error_response(
                    McpError::invalid_request(format!("Message validation failed: {e}")),
                    extract_id_from_malformed(line),
                );
                return self.send_response(writer, &reply).await;
            }
        }

        let message = match JsonRpcMessage::parse(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Failed to parse JSON: {}", e);
                let reply = create_error_response(
                    McpError::parse_error(format!("Invalid JSON: {e}")),
                    extract_id_from_malformed(line),
                );
                return self.send_response(writer, &reply).await;
            }
        };

        if let Err(e) = message.validate() {
            warn!("JSON-RPC validation failed: {}", e);
            let reply = create_error_response(
                McpError::invalid_request(format!("Invalid JSON-RPC: {e}")),
                extract_id_from_malformed(line),
            );
            return self.send_response(writer, &reply).await;
        }

        match process_batch(message, handler).await? {
            Some(reply) => {
                let encoded = reply.to_string().map_err(|e| {
                    TransportError::Protocol(format!("Failed to serialize response: {e}"))
                })?;
                self.send_line(writer, &encoded).await
            }
            None => {
                debug!("No response needed for message");
                Ok(())
            }
        }
    }

    async fn send_response<W>(&self, writer: &mut W, response: &Response) -> Result<(), TransportError>
    where
        W: AsyncWrite + Unpin,
    {
        let encoded = serde_json::to_string(response)
            .map_err(|e| TransportError::Protocol(format!("Failed to serialize response: {e}")))?;
        self.send_line(writer, &encoded).await
    }

    async fn send_line<W>(&self, writer: &mut W, line: &str) -> Result<(), TransportError>
    where
        W: AsyncWrite + Unpin,
    {
        // The size limit guards input only; rendered pages can be large.
        if self.config.validate_messages {
            validate_message_string(line, None).map_err(|e| {
                TransportError::Protocol(format!("Outgoing message validation failed: {e}"))
            })?;
        }

        debug!(bytes = line.len(), "Sending response");

        writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| TransportError::Connection(format!("Failed to write to stdout: {e}")))?;
        writer
            .write_all(b"\n")
            .await
            .map_err(|e| TransportError::Connection(format!("Failed to write to stdout: {e}")))?;
        writer
            .flush()
            .await
            .map_err(|e| TransportError::Connection(format!("Failed to flush stdout: {e}")))
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for StdioTransport {
    async fn start(&mut self, handler: RequestHandler) -> Result<(), TransportError> {
        info!(
            max_message_size = self.config.max_message_size,
            validate = self.config.validate_messages,
            "Starting stdio transport"
        );

        let reader = BufReader::new(tokio::io::stdin());
        self.serve(reader, tokio::io::stdout(), &handler).await
    }

    async fn stop(&mut self) -> Result<(), TransportError> {
        info!("Stopping stdio transport");
        self.running.store(false, Ordering::Relaxed);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), TransportError> {
        if self.running.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(TransportError::Connection(
                "Transport not running".to_string(),
            ))
        }
    }
}
