//! `process` entry point: validate a request and return derived text
//! statistics.

use serde_json::{json, Map, Value};
use tracing::{error, info};

use pagehook_config::PluginConfig;
use pagehook_protocols::{ActionResult, ValidationError};

use crate::api_client::{ApiClient, ApiError};

/// Validated input of the `process` entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRequest {
    pub input_text: String,
    pub parameters: Map<String, Value>,
}

impl ProcessRequest {
    /// Parse a request payload.
    ///
    /// `input_text` is required. `parameters` defaults to `{}` when absent
    /// or `null`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = value
            .as_object()
            .ok_or_else(|| ValidationError::invalid_type("$", "object"))?;

        let input_text = match obj.get("input_text") {
            None | Some(Value::Null) => return Err(ValidationError::missing("input_text")),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(ValidationError::invalid_type("input_text", "string")),
        };

        let parameters = match obj.get("parameters") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map.clone(),
            Some(_) => return Err(ValidationError::invalid_type("parameters", "object")),
        };

        Ok(Self {
            input_text,
            parameters,
        })
    }
}

/// Service behind the `process` entry point.
pub struct PluginService {
    client: ApiClient,
}

impl PluginService {
    pub fn new(config: &PluginConfig) -> Result<Self, ApiError> {
        let client = ApiClient::from_config(config)?;
        info!(
            "Plugin service initialized with max_retries: {}",
            client.policy().max_attempts
        );
        Ok(Self { client })
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Validate and process a request payload.
    pub fn process_request(&self, request: &Value) -> ActionResult {
        let request = match ProcessRequest::from_value(request) {
            Ok(request) => request,
            Err(e) => {
                error!("Error processing request: {}", e);
                return ActionResult::failure(format!("Error processing request: {}", e));
            }
        };

        info!(
            "Processing request with input of {} chars",
            request.input_text.chars().count()
        );

        ActionResult::success_with(
            "Request processed successfully",
            json!({
                "input_length": request.input_text.chars().count(),
                "processed_text": request.input_text.to_uppercase(),
                "parameters_received": Value::Object(request.parameters),
            }),
        )
    }

    /// POST `data` to `endpoint` through the retrying client.
    pub async fn call_api(&self, endpoint: &str, data: &Value) -> Result<Value, ApiError> {
        self.client.post_json(endpoint, data).await
    }
}

/// One-shot entry point: build a service from `config` and process `request`.
pub fn process(config: &PluginConfig, request: &Value) -> ActionResult {
    match PluginService::new(config) {
        Ok(service) => service.process_request(request),
        Err(e) => {
            error!("Error processing request: {}", e);
            ActionResult::failure(format!("Error processing request: {}", e))
        }
    }
}
