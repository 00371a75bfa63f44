//! `/get-job` is requested by the page script but has no backend.

use axum::http::StatusCode;
use axum::{routing::any, Router};

use crate::state::AppState;

/// Pins `/get-job` to a 404 so the catch-all page route never answers it.
pub fn routes() -> Router<AppState> {
    Router::new().route("/get-job", any(job_not_found))
}

async fn job_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
