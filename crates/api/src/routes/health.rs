use axum::{routing::get, Router};

use crate::handlers::health;
use crate::state::AppState;

/// Build the health route, mounted at the root rather than under `/api/v1`.
///
/// Route hierarchy:
///
/// ```text
/// /health    process liveness and catalog readiness (GET)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
