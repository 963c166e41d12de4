//! Unit tests for frame validation

#[cfg(test)]
mod tests {
    use super::super::validation::*;
    use serde_json::{Value, json};

    #[test]
    fn test_validate_message_string() {
        assert!(validate_message_string("hello world", None).is_ok());

        assert!(matches!(
            validate_message_string("hello\nworld", None),
            Err(ValidationError::EmbeddedNewlines)
        ));
        assert!(matches!(
            validate_message_string("hello\rworld", None),
            Err(ValidationError::EmbeddedNewlines)
        ));
        assert!(matches!(
            validate_message_string("hello world", Some(5)),
            Err(ValidationError::MessageTooLarge { size: 11, max: 5 })
        ));
    }

    #[test]
    fn test_validate_jsonrpc_message_kinds() {
        let request = json!({"jsonrpc": "2.0", "method": "tools/list", "id": 1});
        assert_eq!(validate_jsonrpc_message(&request).unwrap(), MessageType::Request);

        let notification = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert_eq!(
            validate_jsonrpc_message(&notification).unwrap(),
            MessageType::Notification
        );

        let response = json!({"jsonrpc": "2.0", "result": {}, "id": 1});
        assert_eq!(validate_jsonrpc_message(&response).unwrap(), MessageType::Response);
    }

    #[test]
    fn test_validate_jsonrpc_message_rejections() {
        let null_id = json!({"jsonrpc": "2.0", "method": "x", "id": null});
        assert!(matches!(
            validate_jsonrpc_message(&null_id),
            Err(ValidationError::NullRequestId)
        ));

        let wrong_version = json!({"jsonrpc": "1.0", "method": "x", "id": 1});
        assert!(validate_jsonrpc_message(&wrong_version).is_err());

        let numeric_method = json!({"jsonrpc": "2.0", "method": 3, "id": 1});
        assert!(validate_jsonrpc_message(&numeric_method).is_err());

        assert!(validate_jsonrpc_message(&json!("just a string")).is_err());
        assert!(validate_jsonrpc_message(&json!({"jsonrpc": "2.0"})).is_err());
    }

    #[test]
    fn test_extract_id_from_malformed() {
        let text = r#"{"jsonrpc": "2.0", "method": "test", "id": 123}"#;
        assert_eq!(extract_id_from_malformed(text), json!(123));

        let text = r#"{"jsonrpc": "2.0", "method": "test", "id": "abc""#;
        assert_eq!(extract_id_from_malformed(text), json!("abc"));

        let text = r#"{"jsonrpc": "2.0", "id": -7, "method": "test""#;
        assert_eq!(extract_id_from_malformed(text), json!(-7));

        let text = r#"{"jsonrpc": "2.0", "method": "test"}"#;
        assert_eq!(extract_id_from_malformed(text), Value::Null);
    }

    #[test]
    fn test_validate_batch() {
        let batch = vec![
            json!({"jsonrpc": "2.0", "method": "test1", "id": 1}),
            json!({"jsonrpc": "2.0", "method": "test2"}),
        ];
        assert_eq!(
            validate_batch(&batch).unwrap(),
            vec![MessageType::Request, MessageType::Notification]
        );

        assert!(validate_batch(&[]).is_err());
    }
}
