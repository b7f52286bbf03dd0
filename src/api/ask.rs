use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::{AskRequest, Outcome};
use crate::state::AppState;

/// POST /api/ask - Validate the submission, query the retrieval service
/// once, and return what the page should show.
///
/// Malformed bodies (missing `query`, negative or mistyped tunables) are
/// answered with a `Warning` outcome too, so the page always gets JSON.
pub async fn ask(
    State(state): State<AppState>,
    req: Result<Json<AskRequest>, JsonRejection>,
) -> Response {
    let outcome = match req {
        Ok(Json(req)) => state.gateway.ask(&req).await,
        Err(rejection) => {
            tracing::debug!("Rejected malformed submission: {rejection}");
            malformed_request(&rejection)
        }
    };
    (status_for(&outcome), Json(outcome)).into_response()
}

fn malformed_request(rejection: &JsonRejection) -> Outcome {
    Outcome::Warning {
        message: format!("Invalid request: {}", rejection.body_text()),
    }
}

fn status_for(outcome: &Outcome) -> StatusCode {
    match outcome {
        Outcome::Answer { .. } | Outcome::NoAnswer { .. } => StatusCode::OK,
        Outcome::Warning { .. } => StatusCode::BAD_REQUEST,
        Outcome::Failed { .. } => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_outcome() {
        assert_eq!(
            status_for(&Outcome::Answer { text: "a".into() }),
            StatusCode::OK
        );
        assert_eq!(status_for(&Outcome::no_answer()), StatusCode::OK);
        assert_eq!(
            status_for(&Outcome::Warning { message: "w".into() }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&Outcome::failed("x")), StatusCode::BAD_GATEWAY);
    }
}
