//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_messenger(config, &mut result);
        Self::validate_plugin(config, &mut result);
        Self::validate_rerank(config, &mut result);

        Ok(result)
    }

    /// Validate and collapse errors into a single [`ConfigError::Invalid`].
    pub fn ensure_valid(config: &Config) -> Result<ValidationResult, ConfigError> {
        let result = Self::validate(config)?;
        if result.is_valid() {
            return Ok(result);
        }
        let summary = result
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::Invalid(summary))
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_messenger(config: &Config, result: &mut ValidationResult) {
        let messenger = &config.messenger;

        if messenger.api_version.is_empty() {
            result.add_error(ValidationError::new(
                "messenger.api_version",
                "api_version cannot be empty",
            ));
        }

        if !is_http_url(&messenger.graph_base_url) {
            result.add_error(ValidationError::new(
                "messenger.graph_base_url",
                "graph_base_url must start with http:// or https://",
            ));
        }

        if messenger.max_attempts == 0 {
            result.add_error(ValidationError::new(
                "messenger.max_attempts",
                "max_attempts must be greater than 0",
            ));
        }

        if messenger.verify_token.is_empty() {
            result.add_warning(ValidationWarning::new(
                "messenger.verify_token",
                "verify_token is empty, webhook verification will always fail",
            ));
        }

        if messenger.page_access_token.is_empty() {
            result.add_warning(ValidationWarning::new(
                "messenger.page_access_token",
                "page_access_token is not set, echo replies will be rejected by the platform",
            ));
        }
    }

    fn validate_plugin(config: &Config, result: &mut ValidationResult) {
        if config.plugin.max_retries == 0 {
            result.add_error(ValidationError::new(
                "plugin.max_retries",
                "max_retries must be greater than 0",
            ));
        }

        if config.plugin.max_retries > 10 {
            result.add_warning(ValidationWarning::new(
                "plugin.max_retries",
                "max_retries is very high (>10), failing calls will take long to surface",
            ));
        }

        if config.plugin.api_key.is_none() {
            result.add_warning(ValidationWarning::new(
                "plugin.api_key",
                "API key is not set, may need to be set via environment variable",
            ));
        }
    }

    fn validate_rerank(config: &Config, result: &mut ValidationResult) {
        if !is_http_url(&config.rerank.base_url) {
            result.add_error(ValidationError::new(
                "rerank.base_url",
                "base_url must start with http:// or https://",
            ));
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
