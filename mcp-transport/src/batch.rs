//! JSON-RPC single and batch message handling

use crate::{RequestHandler, TransportError, validation::validate_batch};
use kdui_mcp_protocol::{Request, Response};
use serde_json::Value;
use tracing::debug;

/// A decoded frame: one message or a batch
#[derive(Debug, Clone)]
pub enum JsonRpcMessage {
    /// A single JSON-RPC object
    Single(Value),
    /// A JSON array of JSON-RPC objects
    Batch(Vec<Value>),
}

impl JsonRpcMessage {
    /// Parse a JSON string into a JsonRpcMessage
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str(text)? {
            Value::Array(values) => Ok(JsonRpcMessage::Batch(values)),
            value => Ok(JsonRpcMessage::Single(value)),
        }
    }

    /// Convert to JSON string
    pub fn to_string(&self) -> Result<String, serde_json::Error> {
        match self {
            JsonRpcMessage::Single(value) => serde_json::to_string(value),
            JsonRpcMessage::Batch(values) => serde_json::to_string(values),
        }
    }

    /// Validate the message structure
    pub fn validate(&self) -> Result<(), TransportError> {
        match self {
            JsonRpcMessage::Single(value) => {
                crate::validation::validate_jsonrpc_message(value)
                    .map_err(|e| TransportError::Protocol(e.to_string()))?;
            }
            JsonRpcMessage::Batch(values) => {
                validate_batch(values).map_err(|e| TransportError::Protocol(e.to_string()))?;
            }
        }
        Ok(())
    }

    /// Split into (requests, notifications), skipping entries that are not requests
    pub fn split(&self) -> (Vec<Request>, Vec<Request>) {
        let values: &[Value] = match self {
            JsonRpcMessage::Single(value) => std::slice::from_ref(value),
            JsonRpcMessage::Batch(values) => values,
        };

        values
            .iter()
            .filter_map(|value| serde_json::from_value::<Request>(value.clone()).ok())
            .partition(|request| !request.is_notification())
    }
}

/// Run every request of a message through the handler.
///
/// Returns `None` when the message held only notifications.
pub async fn process_batch(
    message: JsonRpcMessage,
    handler: &RequestHandler,
) -> Result<Option<JsonRpcMessage>, TransportError> {
    message.validate()?;

    let (requests, notifications) = message.split();
    debug!(
        requests = requests.len(),
        notifications = notifications.len(),
        "Processing message"
    );

    for notification in notifications {
        debug!("Processing notification: {}", notification.method);
        let _ = handler(notification).await;
    }

    if requests.is_empty() {
        return Ok(None);
    }

    let mut responses = Vec::with_capacity(requests.len());
    for request in requests {
        debug!(method = %request.method, id = %request.id, "Processing request");
        responses.push(handler(request).await);
    }

    let encode = |response: &Response| {
        serde_json::to_value(response)
            .map_err(|e| TransportError::Protocol(format!("Failed to serialize response: {e}")))
    };

    match message {
        JsonRpcMessage::Single(_) => Ok(Some(JsonRpcMessage::Single(encode(&responses[0])?))),
        JsonRpcMessage::Batch(_) => {
            let values = responses.iter().map(encode).collect::<Result<Vec<_>, _>>()?;
            Ok(Some(JsonRpcMessage::Batch(values)))
        }
    }
}

/// Create an error response for a malformed request
pub fn create_error_response(error: kdui_mcp_protocol::Error, request_id: Value) -> Response {
    Response::failure(request_id, error)
}
