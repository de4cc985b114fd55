//! Handler for the root-level health probe.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health probe payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` while the catalog answers, `"degraded"` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the catalog table answered the probe.
    pub catalog_ready: bool,
    /// Stored record count, absent while the catalog is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_codes: Option<i64>,
}

/// GET /health
///
/// The probe counts the catalog rather than pinging the pool, so a
/// missing or broken table degrades the probe even while the server
/// itself is up.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let swift_codes = match state.service.count().await {
        Ok(count) => Some(count),
        Err(err) => {
            warn!(error = %err, "health probe could not count the catalog");
            None
        }
    };

    Json(HealthResponse {
        status: if swift_codes.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        catalog_ready: swift_codes.is_some(),
        swift_codes,
    })
}
