//! Tests for backend error mapping

use crate::backend::BackendError;
use kdui_mcp_protocol::{Error, ErrorCode};

#[test]
fn test_backend_error_helpers() {
    assert!(matches!(
        BackendError::configuration("bad"),
        BackendError::Configuration(ref m) if m == "bad"
    ));
    assert!(matches!(
        BackendError::tool_not_found("x"),
        BackendError::ToolNotFound(_)
    ));
    assert!(matches!(
        BackendError::resource_not_found("docs://x"),
        BackendError::ResourceNotFound(_)
    ));
    assert!(matches!(
        BackendError::not_supported("subscribe"),
        BackendError::NotSupported(_)
    ));
    assert!(matches!(BackendError::internal("oops"), BackendError::Internal(_)));
}

#[test]
fn test_backend_error_to_protocol_codes() {
    let cases = [
        (BackendError::NotInitialized, ErrorCode::InternalError),
        (BackendError::configuration("c"), ErrorCode::InvalidParams),
        (BackendError::tool_not_found("t"), ErrorCode::ToolNotFound),
        (BackendError::resource_not_found("r"), ErrorCode::ResourceNotFound),
        (BackendError::not_supported("n"), ErrorCode::MethodNotFound),
        (BackendError::internal("i"), ErrorCode::InternalError),
    ];

    for (backend_error, expected) in cases {
        let error: Error = backend_error.into();
        assert_eq!(error.code, expected);
    }
}

#[test]
fn test_backend_error_display() {
    assert_eq!(
        BackendError::tool_not_found("create_spaceship").to_string(),
        "Tool not found: create_spaceship"
    );
    assert_eq!(
        BackendError::NotInitialized.to_string(),
        "Backend not initialized"
    );
}
