//! HTTP route definitions and handlers.
//!
//! The demo page answers every GET path except `/get-job`, which is routed
//! explicitly to a 404.

mod job_routes;
mod page_routes;

pub use page_routes::JOB_FETCH_ERROR;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(job_routes::routes())
        .merge(page_routes::routes())
        .with_state(state)
}
