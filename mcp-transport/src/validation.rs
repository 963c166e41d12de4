//! Wire-level checks for newline-delimited JSON-RPC frames

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;

/// Ways a frame can break the stdio wire rules
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A frame must fit on one line
    #[error("Message contains embedded newlines")]
    EmbeddedNewlines,

    /// A request carried `"id": null`
    #[error("Request ID cannot be null")]
    NullRequestId,

    /// Frame larger than the configured limit
    #[error("Message exceeds maximum size: {size} > {max}")]
    MessageTooLarge {
        /// Actual size in bytes
        size: usize,
        /// Configured limit
        max: usize,
    },

    /// Not a JSON-RPC 2.0 object
    #[error("Invalid JSON-RPC format: {0}")]
    InvalidFormat(String),
}

/// JSON-RPC message kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    /// Has a method and an id
    Request,
    /// Has a result or error
    Response,
    /// Has a method and no id
    Notification,
}

/// Validates a raw frame before it is parsed or after it is encoded
pub fn validate_message_string(
    message: &str,
    max_size: Option<usize>,
) -> Result<(), ValidationError> {
    if message.contains('\n') || message.contains('\r') {
        return Err(ValidationError::EmbeddedNewlines);
    }

    if let Some(max) = max_size {
        if message.len() > max {
            return Err(ValidationError::MessageTooLarge {
                size: message.len(),
                max,
            });
        }
    }

    Ok(())
}

/// Validates JSON-RPC message structure and ID requirements
pub fn validate_jsonrpc_message(value: &Value) -> Result<MessageType, ValidationError> {
    let obj = value.as_object().ok_or_else(|| {
        ValidationError::InvalidFormat("Message must be a JSON object".to_string())
    })?;

    if obj.get("jsonrpc").and_then(|v| v.as_str()) != Some("2.0") {
        return Err(ValidationError::InvalidFormat(
            "Missing or invalid jsonrpc field".to_string(),
        ));
    }

    if let Some(method) = obj.get("method") {
        if !method.is_string() {
            return Err(ValidationError::InvalidFormat(
                "method must be a string".to_string(),
            ));
        }
        match obj.get("id") {
            Some(Value::Null) => Err(ValidationError::NullRequestId),
            Some(_) => Ok(MessageType::Request),
            None => Ok(MessageType::Notification),
        }
    } else if obj.contains_key("result") || obj.contains_key("error") {
        if !obj.contains_key("id") {
            return Err(ValidationError::InvalidFormat(
                "Response must have an ID".to_string(),
            ));
        }
        Ok(MessageType::Response)
    } else {
        Err(ValidationError::InvalidFormat(
            "Unknown message type".to_string(),
        ))
    }
}

/// Validates every entry of a batch
pub fn validate_batch(batch: &[Value]) -> Result<Vec<MessageType>, ValidationError> {
    if batch.is_empty() {
        return Err(ValidationError::InvalidFormat(
            "Batch cannot be empty".to_string(),
        ));
    }

    batch.iter().map(validate_jsonrpc_message).collect()
}

/// Best-effort id recovery so error replies can still be correlated
pub fn extract_id_from_malformed(text: &str) -> Value {
    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(text) {
        if let Some(id) = obj.get("id") {
            return id.clone();
        }
    }

    extract_id_with_regex(text).unwrap_or(Value::Null)
}

fn id_patterns() -> &'static [Regex; 2] {
    static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r#""id"\s*:\s*"([^"]+)""#).expect("string id pattern"),
            Regex::new(r#""id"\s*:\s*(-?\d+)"#).expect("numeric id pattern"),
        ]
    })
}

fn extract_id_with_regex(text: &str) -> Option<Value> {
    let [string_id, number_id] = id_patterns();

    if let Some(captures) = string_id.captures(text) {
        return captures.get(1).map(|m| Value::String(m.as_str().to_string()));
    }

    number_id
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .map(|n| Value::Number(n.into()))
}
