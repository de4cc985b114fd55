use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::SwiftCodeService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: swiftdex_db::DbPool,
    /// Catalog operations shared by handlers and the startup loader.
    pub service: Arc<SwiftCodeService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
