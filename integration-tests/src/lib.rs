//! Integration tests for the KD UI server
//!
//! Requests go through the generic JSON-RPC handler exactly as they would
//! arrive from a client over stdio.

#[cfg(test)]
mod end_to_end_scenarios;

/// Common test utilities for integration tests
pub mod test_utils {
    use kdui_mcp_protocol::{Request, Response};
    use kdui_mcp_server::GenericServerHandler;
    use kdui_server::{KdUiBackend, KdUiConfig};
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};
    use std::sync::Arc;

    /// Handler over a backend with sequential ids
    pub fn test_handler() -> GenericServerHandler<KdUiBackend> {
        GenericServerHandler::new(Arc::new(KdUiBackend::new(KdUiConfig::deterministic())))
    }

    /// Send one request and return the response
    pub async fn send(
        handler: &GenericServerHandler<KdUiBackend>,
        method: &str,
        params: Value,
    ) -> Response {
        handler
            .handle_request(Request::new(method, params, json!(method)))
            .await
    }

    /// Send one request and decode its result, failing on an error response
    pub async fn call<T: DeserializeOwned>(
        handler: &GenericServerHandler<KdUiBackend>,
        method: &str,
        params: Value,
    ) -> anyhow::Result<T> {
        let response = send(handler, method, params).await;
        if let Some(error) = response.error {
            anyhow::bail!("{method} failed: {error}");
        }
        let result = response
            .result
            .ok_or_else(|| anyhow::anyhow!("{method} returned no result"))?;
        Ok(serde_json::from_value(result)?)
    }

    /// Initialize as a named client
    pub async fn initialize(handler: &GenericServerHandler<KdUiBackend>) -> anyhow::Result<Value> {
        call(
            handler,
            "initialize",
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "integration-client", "version": "1.0.0"}
            }),
        )
        .await
    }

    /// Markup returned by a tool call
    pub async fn tool_text(
        handler: &GenericServerHandler<KdUiBackend>,
        name: &str,
        arguments: Value,
    ) -> anyhow::Result<String> {
        let result: Value = call(
            handler,
            "tools/call",
            json!({"name": name, "arguments": arguments}),
        )
        .await?;
        anyhow::ensure!(result["isError"] == json!(false), "{name} reported an error");
        result["content"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("{name} returned no text"))
    }
}
