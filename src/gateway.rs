use crate::config::RetrievalConfig;
use crate::error::RetrievalError;
use crate::models::{AskRequest, Outcome};
use crate::retrieval::retrieve;

/// Turns a page submission into one retrieval call and a displayable
/// [`Outcome`]. Holds no per-request state; every `ask` is independent.
#[derive(Clone)]
pub struct QueryGateway {
    client: reqwest::Client,
    config: RetrievalConfig,
}

impl QueryGateway {
    pub fn new(client: reqwest::Client, config: RetrievalConfig) -> Self {
        Self { client, config }
    }

    pub async fn ask(&self, req: &AskRequest) -> Outcome {
        let body = match req.validate() {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Rejected submission: {e}");
                return e.into();
            }
        };

        tracing::info!(
            top_k = body.top_k,
            max_chunks_per_document = body.max_chunks_per_document,
            rerank = body.rerank,
            recency_bias = body.recency_bias,
            "Submitting retrieval query"
        );
        tracing::debug!(query = %body.query, "Query text");

        let outcome = match retrieve(&self.client, &self.config, &body).await {
            Ok(resp) => {
                tracing::info!("Retrieval returned {} scored chunks", resp.scored_chunks.len());
                match resp.top_text() {
                    Some(text) => Outcome::Answer {
                        text: text.to_string(),
                    },
                    None => Outcome::no_answer(),
                }
            }
            Err(e) => {
                tracing::warn!("Retrieval failed: {e}");
                Outcome::failed(failure_detail(&e))
            }
        };

        tracing::info!("Submission finished: {}", outcome.kind());
        outcome
    }
}

fn failure_detail(err: &RetrievalError) -> String {
    match err {
        RetrievalError::Status { body, .. } => format!("Error: {body}"),
        other => format!("Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_failure_detail_is_raw_body() {
        let err = RetrievalError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"detail":"Invalid token"}"#.to_string(),
        };
        assert_eq!(failure_detail(&err), r#"Error: {"detail":"Invalid token"}"#);
    }

    #[tokio::test]
    async fn test_blank_query_short_circuits() {
        // Unroutable endpoint: reaching the network would fail differently.
        let config = RetrievalConfig::new("http://127.0.0.1:9", "tok").unwrap();
        let gateway = QueryGateway::new(reqwest::Client::new(), config);

        let outcome = gateway.ask(&AskRequest::new("   ")).await;
        assert_eq!(
            outcome,
            Outcome::Warning {
                message: "Please enter a question.".to_string()
            }
        );
    }
}
