pub mod health;
pub mod swift_codes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /swift-codes                      create (POST)
/// /swift-codes/{code}               get, delete
/// /swift-codes/country/{country}    list by country (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/swift-codes", swift_codes::router())
}
