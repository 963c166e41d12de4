//! Tests for the crate's public re-exports

use crate::*;

#[test]
fn test_protocol_reexports() {
    let error = protocol::Error::tool_not_found("x");
    assert_eq!(error.code, ErrorCode::ToolNotFound);
    assert_eq!(transport::TransportConfig::default(), TransportConfig::stdio());
}

#[test]
fn test_backend_error_reexport_converts() {
    let error: Error = BackendError::resource_not_found("template://missing").into();
    assert!(error.message.contains("template://missing"));
}
