//! Unit tests for transport construction

#[cfg(test)]
mod tests {
    use super::super::*;

    #[tokio::test]
    async fn test_create_stdio_transport() {
        let transport = create_transport(TransportConfig::default()).unwrap();
        // Not serving yet
        assert!(transport.health_check().await.is_err());
    }

    #[test]
    fn test_zero_message_size_is_rejected() {
        let result = create_transport(TransportConfig::stdio_with_limit(0));
        assert!(matches!(result, Err(TransportError::Config(_))));
    }

    #[test]
    fn test_transport_error_display() {
        let error = TransportError::Connection("pipe closed".to_string());
        assert_eq!(error.to_string(), "Connection error: pipe closed");
    }
}
