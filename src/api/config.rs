use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::models::{MAX_CHUNKS_MAX, MAX_CHUNKS_MIN, TOP_K_MAX, TOP_K_MIN};
use crate::state::AppState;

/// Settings the page may show. Credentials and endpoint are required at
/// startup and never leave the server, so they aren't reported.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub timeout_secs: Option<u64>,
    pub top_k_range: (u32, u32),
    pub max_chunks_per_document_range: (u32, u32),
}

/// GET /api/config - Non-secret view of the running configuration
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        timeout_secs: state.config.retrieval.timeout_secs,
        top_k_range: (TOP_K_MIN, TOP_K_MAX),
        max_chunks_per_document_range: (MAX_CHUNKS_MIN, MAX_CHUNKS_MAX),
    })
}
