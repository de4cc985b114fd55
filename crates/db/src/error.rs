use thiserror::Error;

/// Failures surfaced by the catalog repository.
///
/// Uniqueness and existence outcomes come from the statements themselves:
/// a unique-constraint violation maps to [`RepoError::Duplicate`] and a
/// DELETE affecting zero rows maps to [`RepoError::NotFound`]. There are
/// no read-before-write checks to race against.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("record not found")]
    NotFound,

    #[error("record already exists")]
    Duplicate,

    /// A chunked batch insert failed part-way. Rows from chunks before the
    /// failure stay committed.
    #[error("batch insert aborted after {committed} of {total} rows: {source}")]
    BatchAborted {
        committed: u64,
        total: usize,
        #[source]
        source: sqlx::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// True for a PostgreSQL unique-constraint violation (error code 23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
