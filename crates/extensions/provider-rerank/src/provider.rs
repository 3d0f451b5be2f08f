//! Rerank client.

use serde_json::Value;
use tracing::{debug, info};

use pagehook_config::{Config, PluginConfig, RerankConfig};
use pagehook_runtime::{ApiClient, RetryPolicy};

use crate::error::RerankError;
use crate::models::{RerankDocument, RerankRequest, RerankResponse, RerankResult};

pub const DEFAULT_RERANK_BASE_URL: &str = "https://api.jina.ai/v1";

const CHECK_QUERY: &str = "What is the capital of the United States?";
const CHECK_DOCS: [&str; 2] = [
    "Carson City is the capital city of the American state of Nevada. At the 2010 United States \
     Census, Carson City had a population of 55,274.",
    "The Commonwealth of the Northern Mariana Islands is a group of islands in the Pacific Ocean that \
     are a political division controlled by the United States. Its capital is Saipan.",
];
const CHECK_THRESHOLD: f64 = 0.8;

/// Client for a Jina-compatible rerank service.
pub struct RerankClient {
    client: ApiClient,
    base_url: String,
}

impl RerankClient {
    pub fn new(base_url: &str, api_key: Option<String>, policy: RetryPolicy) -> Self {
        Self {
            client: ApiClient::new(api_key, policy),
            base_url: normalize_base_url(base_url),
        }
    }

    /// Build from the `[rerank]` section, falling back to `plugin.api_key`
    /// and using the `[plugin]` retry settings.
    pub fn from_config(config: &Config) -> Result<Self, RerankError> {
        let RerankConfig { base_url, api_key } = &config.rerank;
        let plugin = PluginConfig {
            api_key: api_key.clone().or_else(|| config.plugin.api_key.clone()),
            ..config.plugin.clone()
        };
        let client = ApiClient::from_config(&plugin)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rerank `docs` against `query`.
    ///
    /// Documents scoring below `score_threshold` are dropped. An empty
    /// `docs` list returns an empty result without calling the service.
    pub async fn rerank(
        &self,
        model: &str,
        query: &str,
        docs: &[String],
        score_threshold: Option<f64>,
        top_n: Option<usize>,
    ) -> Result<RerankResult, RerankError> {
        if docs.is_empty() {
            return Ok(RerankResult::empty(model));
        }

        let request = RerankRequest {
            model,
            query,
            documents: docs,
            top_n,
        };
        let body =
            serde_json::to_value(&request).map_err(|e| RerankError::BadResponse(e.to_string()))?;

        debug!("Reranking {} documents with {}", docs.len(), model);
        let response = self
            .client
            .post_json(&format!("{}/rerank", self.base_url), &body)
            .await?;

        let docs = parse_documents(response, score_threshold)?;
        info!("Rerank with {} kept {} documents", model, docs.len());

        Ok(RerankResult {
            model: model.to_string(),
            docs,
        })
    }

    /// Check that the configured credentials can reach the service.
    pub async fn validate_credentials(&self, model: &str) -> Result<(), RerankError> {
        let docs: Vec<String> = CHECK_DOCS.iter().map(|d| d.to_string()).collect();
        self.rerank(model, CHECK_QUERY, &docs, Some(CHECK_THRESHOLD), None)
            .await
            .map(|_| ())
            .map_err(|e| RerankError::CredentialsValidateFailed(e.to_string()))
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        DEFAULT_RERANK_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_documents(
    response: Value,
    score_threshold: Option<f64>,
) -> Result<Vec<RerankDocument>, RerankError> {
    let response: RerankResponse =
        serde_json::from_value(response).map_err(|e| RerankError::BadResponse(e.to_string()))?;

    Ok(response
        .results
        .into_iter()
        .filter(|item| score_threshold.is_none_or(|t| item.relevance_score >= t))
        .map(|item| RerankDocument {
            index: item.index,
            text: item.document.text,
            score: item.relevance_score,
        })
        .collect())
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
