//! PostgreSQL persistence for the SWIFT bank catalog.

pub mod error;
pub mod models;
pub mod repositories;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub use error::RepoError;

/// Shared connection pool alias used across the workspace.
pub type DbPool = sqlx::PgPool;

/// Create a connection pool with the configured size cap.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Cheap connectivity probe run before the startup schema bootstrap.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the catalog table and its indexes when missing.
///
/// Bootstrap only: existing tables are left untouched. The primary key on
/// `swift_code` doubles as the store-wide uniqueness constraint that write
/// paths rely on.
pub async fn ensure_schema(pool: &DbPool, table: &str) -> Result<(), sqlx::Error> {
    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            swift_code       VARCHAR(15)  PRIMARY KEY,
            swift_code_base  VARCHAR(8)   NOT NULL,
            country_iso_code VARCHAR(2)   NOT NULL,
            bank_name        VARCHAR(100) NOT NULL,
            is_headquarters  BOOLEAN      NOT NULL,
            address          VARCHAR(200) NOT NULL,
            country_name     VARCHAR(100) NOT NULL
        )"
    );
    sqlx::query(&ddl).execute(pool).await?;

    for column in ["swift_code_base", "country_iso_code"] {
        let ddl =
            format!("CREATE INDEX IF NOT EXISTS idx_{table}_{column} ON {table} ({column})");
        sqlx::query(&ddl).execute(pool).await?;
    }

    tracing::debug!(table, "catalog schema ready");
    Ok(())
}
