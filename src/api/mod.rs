pub mod ask;
pub mod config;
pub mod health;

use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        // Serve frontend
        .route("/", get(serve_index))
        .route("/health", get(health::health))
        .route("/api/ask", post(ask::ask))
        .route("/api/config", get(config::get_config))
        .with_state(state)
        .fallback(get(serve_index))
        .layer(trace_layer)
}

async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
