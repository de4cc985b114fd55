use swiftdex_core::parser::ValidationPolicy;
use swiftdex_db::repositories::swift_bank_repo::DEFAULT_CHUNK_SIZE;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Catalog storage and ingestion configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog table name. Interpolated into SQL, so it must be a plain
    /// identifier; validated here at load time.
    pub table: String,
    /// Connection pool size cap (default: `5`).
    pub max_connections: u32,
    /// Rows per batched INSERT chunk (default: `100`).
    pub batch_chunk_size: usize,
    /// Path of the CSV catalog file loaded at startup.
    pub swift_codes_file: String,
    /// Whether to run the startup load at all (default: `true`).
    pub auto_load: bool,
    /// Validation policy for the startup load (default: `lenient`).
    pub load_policy: ValidationPolicy,
}

impl CatalogConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default             |
    /// |----------------------|---------------------|
    /// | `SWIFT_TABLE`        | `swift_banks`       |
    /// | `DB_MAX_CONNECTIONS` | `5`                 |
    /// | `BATCH_CHUNK_SIZE`   | `100`               |
    /// | `SWIFT_CODES_FILE`   | `./swift_codes.csv` |
    /// | `AUTO_LOAD`          | `true`              |
    /// | `LOAD_POLICY`        | `lenient`           |
    pub fn from_env() -> Self {
        let table = std::env::var("SWIFT_TABLE").unwrap_or_else(|_| "swift_banks".into());
        assert!(
            is_identifier(&table),
            "SWIFT_TABLE must be a plain identifier (letters, digits, underscores), got '{table}'"
        );

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let batch_chunk_size: usize = std::env::var("BATCH_CHUNK_SIZE")
            .unwrap_or_else(|_| DEFAULT_CHUNK_SIZE.to_string())
            .parse()
            .expect("BATCH_CHUNK_SIZE must be a valid usize");

        let swift_codes_file =
            std::env::var("SWIFT_CODES_FILE").unwrap_or_else(|_| "./swift_codes.csv".into());

        let auto_load: bool = std::env::var("AUTO_LOAD")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("AUTO_LOAD must be true or false");

        let load_policy = ValidationPolicy::from_str(
            &std::env::var("LOAD_POLICY").unwrap_or_else(|_| "lenient".into()),
        )
        .expect("LOAD_POLICY must be 'strict' or 'lenient'");

        Self {
            table,
            max_connections,
            batch_chunk_size,
            swift_codes_file,
            auto_load,
            load_policy,
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
