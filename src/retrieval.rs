//! Client for the hosted retrieval API's `POST /retrievals` endpoint.
//!
//! One request per call: no retries, no caching. Errors are classified so
//! the gateway can tell a remote rejection (raw body kept for display) from
//! a transport failure.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::RetrievalConfig;
use crate::error::RetrievalError;

/// Send one retrieval query and decode the ranked chunks.
///
/// Only HTTP 200 is treated as success. Transport and decode errors are
/// stripped of the request URL because the base URL is a secret.
pub async fn retrieve(
    client: &reqwest::Client,
    config: &RetrievalConfig,
    request: &RetrievalRequest,
) -> Result<RetrievalResponse, RetrievalError> {
    let mut builder = client
        .post(config.retrievals_url())
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {}", config.api_key))
        .json(request);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }

    let resp = builder
        .send()
        .await
        .map_err(|e| RetrievalError::Transport(e.without_url()))?;

    if resp.status() != StatusCode::OK {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(RetrievalError::Status { status, body });
    }

    resp.json::<RetrievalResponse>()
        .await
        .map_err(|e| RetrievalError::Decode(e.without_url()))
}

// ─── Request/Response types ────────────────────────────

/// Outbound body. Field order matches what the service documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalRequest {
    pub query: String,
    pub top_k: u32,
    pub rerank: bool,
    pub recency_bias: bool,
    pub max_chunks_per_document: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetrievalResponse {
    #[serde(default)]
    pub scored_chunks: Vec<ScoredChunk>,
}

/// One ranked snippet. The service sends more fields (ids, metadata);
/// they're ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredChunk {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl RetrievalResponse {
    /// Text of the top-ranked chunk, if the service returned one with text.
    pub fn top_text(&self) -> Option<&str> {
        self.scored_chunks.first()?.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_field_names() {
        let body = RetrievalRequest {
            query: "q".to_string(),
            top_k: 30,
            rerank: true,
            recency_bias: false,
            max_chunks_per_document: 5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "query": "q",
                "top_k": 30,
                "rerank": true,
                "recency_bias": false,
                "max_chunks_per_document": 5
            })
        );
    }

    #[test]
    fn test_top_text_takes_first_chunk() {
        let resp: RetrievalResponse = serde_json::from_str(
            r#"{"scored_chunks":[
                {"text":"first","score":0.91,"document_id":"d1","metadata":{}},
                {"text":"second","score":0.42}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.top_text(), Some("first"));
        assert_eq!(resp.scored_chunks[0].score, Some(0.91));
    }

    #[test]
    fn test_top_text_empty_chunks() {
        let resp: RetrievalResponse = serde_json::from_str(r#"{"scored_chunks":[]}"#).unwrap();
        assert_eq!(resp.top_text(), None);
    }

    #[test]
    fn test_missing_scored_chunks_is_empty() {
        let resp: RetrievalResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(resp.scored_chunks.is_empty());
        assert_eq!(resp.top_text(), None);
    }

    #[test]
    fn test_first_chunk_without_text() {
        let resp: RetrievalResponse =
            serde_json::from_str(r#"{"scored_chunks":[{"score":0.3},{"text":"later"}]}"#).unwrap();
        assert_eq!(resp.top_text(), None);
    }

    #[test]
    fn test_top_text_preserved_exactly() {
        let resp: RetrievalResponse = serde_json::from_str(
            r#"{"scored_chunks":[{"text":"  Updates go out\nevery Friday.  "}]}"#,
        )
        .unwrap();
        assert_eq!(resp.top_text(), Some("  Updates go out\nevery Friday.  "));
    }
}
