use thiserror::Error;

/// Domain-level errors crossing the service boundary.
///
/// Transport layers map these onto their own status codes; nothing in here
/// knows about HTTP.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Caller input failed validation before any store access.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested record does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A record with the same unique key is already stored.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// Store or other infrastructure failure. The message carries the
    /// source description; callers log it rather than expose it.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience alias for fallible domain operations.
pub type CoreResult<T> = Result<T, CoreError>;
