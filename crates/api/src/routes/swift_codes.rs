//! Route definitions for the `/swift-codes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::swift_codes;
use crate::state::AppState;

/// Routes mounted at `/swift-codes`.
///
/// ```text
/// POST   /                     -> create_swift_code
/// GET    /{code}               -> get_swift_code
/// DELETE /{code}               -> delete_swift_code
/// GET    /country/{country}    -> get_swift_codes_by_country
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(swift_codes::create_swift_code))
        .route(
            "/country/{country}",
            get(swift_codes::get_swift_codes_by_country),
        )
        .route(
            "/{code}",
            get(swift_codes::get_swift_code).delete(swift_codes::delete_swift_code),
        )
}
