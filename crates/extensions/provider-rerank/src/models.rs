//! Rerank request and response types.

use serde::{Deserialize, Serialize};

/// `POST /rerank` body.
#[derive(Debug, Serialize)]
pub(crate) struct RerankRequest<'a> {
    pub model: &'a str,
    pub query: &'a str,
    pub documents: &'a [String],
    pub top_n: Option<usize>,
}

/// `POST /rerank` response.
#[derive(Debug, Deserialize)]
pub(crate) struct RerankResponse {
    pub results: Vec<RerankResponseItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RerankResponseItem {
    pub index: usize,
    pub document: ResponseDocument,
    pub relevance_score: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseDocument {
    pub text: String,
}

/// A document kept after reranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankDocument {
    /// Position of the document in the request.
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Reranked documents for a model, in the order the service ranked them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankResult {
    pub model: String,
    pub docs: Vec<RerankDocument>,
}

impl RerankResult {
    pub fn empty(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            docs: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let docs = vec!["a".to_string(), "b".to_string()];
        let request = RerankRequest {
            model: "jina-reranker-v2-base-multilingual",
            query: "q",
            documents: &docs,
            top_n: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "jina-reranker-v2-base-multilingual");
        assert_eq!(json["documents"], serde_json::json!(["a", "b"]));
        assert!(json["top_n"].is_null());
    }

    #[test]
    fn test_response_deserialization() {
        let json = serde_json::json!({
            "model": "m",
            "usage": {"total_tokens": 10},
            "results": [
                {"index": 1, "document": {"text": "b"}, "relevance_score": 0.9}
            ]
        });
        let response: RerankResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].index, 1);
        assert_eq!(response.results[0].document.text, "b");
    }
}
