//! Tests for protocol version helpers

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_supported_versions() {
        assert!(is_protocol_version_supported(MCP_VERSION));
        assert!(is_protocol_version_supported("2024-11-05"));
        assert!(!is_protocol_version_supported("2023-01-01"));
    }

    #[test]
    fn test_negotiation_echoes_supported_version() {
        assert_eq!(negotiate_protocol_version("2025-03-26"), "2025-03-26");
        assert_eq!(negotiate_protocol_version("1.0"), MCP_VERSION);
    }

    #[test]
    fn test_validate_protocol_version() {
        assert!(validate_protocol_version("2025-06-18").is_ok());
        let err = validate_protocol_version("0.1").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }
}
