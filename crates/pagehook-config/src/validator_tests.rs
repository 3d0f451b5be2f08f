    use super::*;

    fn configured() -> Config {
        let mut config = Config::default();
        config.messenger.page_access_token = "page-token".to_string();
        config.messenger.verify_token = "verify-token".to_string();
        config.plugin.api_key = Some("api-key".to_string());
        config
    }

    #[test]
    fn test_validate_configured() {
        let result = ConfigValidator::validate(&configured()).unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_default_config_warns() {
        let result = ConfigValidator::validate(&Config::default()).unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "messenger.verify_token"));
        assert!(result.warnings.iter().any(|w| w.path == "messenger.page_access_token"));
        assert!(result.warnings.iter().any(|w| w.path == "plugin.api_key"));
    }

    #[test]
    fn test_validate_invalid_port() {
        let mut config = configured();
        config.server.port = 0;

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "server.port"));
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = configured();
        config.server.host = String::new();

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.errors.iter().any(|e| e.path == "server.host"));
    }

    #[test]
    fn test_validate_empty_api_version() {
        let mut config = configured();
        config.messenger.api_version = String::new();

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.errors.iter().any(|e| e.path == "messenger.api_version"));
    }

    #[test]
    fn test_validate_zero_max_retries() {
        let mut config = configured();
        config.plugin.max_retries = 0;

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "plugin.max_retries"));
    }

    #[test]
    fn test_validate_high_max_retries_warning() {
        let mut config = configured();
        config.plugin.max_retries = 50;

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "plugin.max_retries"));
    }

    #[test]
    fn test_validate_zero_send_attempts() {
        let mut config = configured();
        config.messenger.max_attempts = 0;

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.errors.iter().any(|e| e.path == "messenger.max_attempts"));
    }

    #[test]
    fn test_validate_invalid_urls() {
        let mut config = configured();
        config.messenger.graph_base_url = "graph.facebook.com".to_string();
        config.rerank.base_url = "ftp://example.com".to_string();

        let result = ConfigValidator::validate(&config).unwrap();
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_ensure_valid_collapses_errors() {
        let mut config = configured();
        config.server.port = 0;
        config.plugin.max_retries = 0;

        let err = ConfigValidator::ensure_valid(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("server.port"));
        assert!(message.contains("plugin.max_retries"));
    }

    #[test]
    fn test_ensure_valid_ok() {
        assert!(ConfigValidator::ensure_valid(&configured()).is_ok());
    }

    #[test]
    fn test_validation_result_helpers() {
        let mut result = ValidationResult::default();
        assert!(result.is_valid());
        result.add_warning(ValidationWarning::new("a", "b"));
        assert!(result.is_valid());
        result.add_error(ValidationError::new("c", "d"));
        assert!(!result.is_valid());
    }
