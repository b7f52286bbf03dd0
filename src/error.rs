use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Startup configuration problems. Any of these aborts the server.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0} (set it in the environment or the [api] table of the secrets file)")]
    Missing(&'static str),
    #[error("retrieval base URL must start with http:// or https://")]
    InvalidBaseUrl,
    #[error("RAGIE_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
    #[error("failed to read secrets file {}", path.display())]
    ReadSecrets {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse secrets file {}", path.display())]
    ParseSecrets {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A submission rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a question.")]
    EmptyQuery,
    #[error("{field} must be between {min} and {max}, got {value}.")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
}

/// Failure of the outbound retrieval call.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("retrieval service returned {status}")]
    Status { status: StatusCode, body: String },
    #[error("could not reach retrieval service: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("could not decode retrieval response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_message_matches_page_warning() {
        assert_eq!(
            ValidationError::EmptyQuery.to_string(),
            "Please enter a question."
        );
    }

    #[test]
    fn test_out_of_range_message_names_bounds() {
        let err = ValidationError::OutOfRange {
            field: "top_k",
            min: 1,
            max: 30,
            value: 31,
        };
        assert_eq!(err.to_string(), "top_k must be between 1 and 30, got 31.");
    }

    #[test]
    fn test_missing_setting_names_variable() {
        let msg = ConfigError::Missing("RAGIE_API_KEY").to_string();
        assert!(msg.contains("RAGIE_API_KEY"));
    }
}
