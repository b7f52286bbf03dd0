use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::retrieval::RetrievalRequest;

pub const TOP_K_MIN: u32 = 1;
pub const TOP_K_MAX: u32 = 30;
pub const MAX_CHUNKS_MIN: u32 = 1;
pub const MAX_CHUNKS_MAX: u32 = 5;

pub const NO_ANSWER_MESSAGE: &str = "No relevant answer found.";
pub const FAILURE_MESSAGE: &str = "Failed to retrieve answer. Please try again later.";

/// A question submitted from the page, with the sidebar settings as they
/// were at submission time.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub query: String,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_max_chunks_per_document")]
    pub max_chunks_per_document: u32,
    #[serde(default)]
    pub rerank: bool,
    #[serde(default)]
    pub recency_bias: bool,
}

fn default_top_k() -> u32 {
    2
}

fn default_max_chunks_per_document() -> u32 {
    2
}

impl AskRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: default_top_k(),
            max_chunks_per_document: default_max_chunks_per_document(),
            rerank: false,
            recency_bias: false,
        }
    }

    /// Check the submission locally and turn it into the outbound body.
    pub fn validate(&self) -> Result<RetrievalRequest, ValidationError> {
        if self.query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        check_range("top_k", self.top_k, TOP_K_MIN, TOP_K_MAX)?;
        check_range(
            "max_chunks_per_document",
            self.max_chunks_per_document,
            MAX_CHUNKS_MIN,
            MAX_CHUNKS_MAX,
        )?;

        Ok(RetrievalRequest {
            query: self.query.clone(),
            top_k: self.top_k,
            rerank: self.rerank,
            recency_bias: self.recency_bias,
            max_chunks_per_document: self.max_chunks_per_document,
        })
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

/// What the page shows for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Rejected locally; nothing was sent.
    Warning { message: String },
    /// Text of the top-ranked chunk.
    Answer { text: String },
    NoAnswer { message: String },
    Failed { message: String, detail: String },
}

impl Outcome {
    pub fn no_answer() -> Self {
        Outcome::NoAnswer {
            message: NO_ANSWER_MESSAGE.to_string(),
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Outcome::Failed {
            message: FAILURE_MESSAGE.to_string(),
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Warning { .. } => "warning",
            Outcome::Answer { .. } => "answer",
            Outcome::NoAnswer { .. } => "no_answer",
            Outcome::Failed { .. } => "failed",
        }
    }
}

impl From<ValidationError> for Outcome {
    fn from(err: ValidationError) -> Self {
        Outcome::Warning {
            message: err.to_string(),
        }
    }
}
