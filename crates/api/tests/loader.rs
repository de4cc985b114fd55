//! Integration tests for the CSV catalog loader.
//!
//! Each test writes a small catalog file to a temp path and loads it into
//! a fresh test database through the service layer.

use std::io::Write;
use std::path::Path;

use assert_matches::assert_matches;
use sqlx::PgPool;
use swiftdex_api::loader::{self, LoadError};
use swiftdex_api::service::SwiftCodeService;
use swiftdex_core::parser::{ParseError, ValidationPolicy};
use swiftdex_core::reader::ReadError;
use swiftdex_db::repositories::SwiftBankRepo;
use tempfile::NamedTempFile;

const TABLE: &str = "swift_banks";
const HEADER: &str =
    "COUNTRY ISO2 CODE,SWIFT CODE,CODE TYPE,NAME,ADDRESS,TOWN NAME,COUNTRY NAME,TIME ZONE";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn service(pool: &PgPool) -> SwiftCodeService {
    swiftdex_db::ensure_schema(pool, TABLE).await.unwrap();
    // Chunk size 2 so multi-row files span several INSERT statements.
    SwiftCodeService::new(pool.clone(), SwiftBankRepo::new(TABLE.to_string(), 2))
}

fn catalog_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn row(code: &str) -> String {
    format!("US,{code},BIC11,Alpha Bank,1 Alpha Street,New York,UNITED STATES,America/New_York")
}

// ---------------------------------------------------------------------------
// Test: a clean file loads completely
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn load_catalog_inserts_valid_rows(pool: PgPool) {
    let service = service(&pool).await;
    let file = catalog_file(&[
        &row("ABCDUS33XXX"),
        &row("ABCDUS33ABC"),
        &row("ABCDUS33DEF"),
    ]);

    let summary = loader::load_catalog(&service, file.path(), ValidationPolicy::Lenient)
        .await
        .unwrap();

    assert_eq!(summary.total_rows, 3);
    assert_eq!(summary.inserted, 3);
    assert_eq!(summary.already_present, 0);
    assert_eq!(summary.skipped_invalid, 0);

    let found = service.lookup("ABCDUS33XXX").await.unwrap();
    assert_eq!(found.branches.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: re-running the same file inserts nothing new
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn reload_is_idempotent(pool: PgPool) {
    let service = service(&pool).await;
    let file = catalog_file(&[&row("ABCDUS33XXX"), &row("ABCDUS33ABC")]);

    loader::load_catalog(&service, file.path(), ValidationPolicy::Lenient)
        .await
        .unwrap();
    let summary = loader::load_catalog(&service, file.path(), ValidationPolicy::Lenient)
        .await
        .unwrap();

    assert_eq!(summary.inserted, 0);
    assert_eq!(summary.already_present, 2);
    assert_eq!(service.count().await.unwrap(), 2);
}

// ---------------------------------------------------------------------------
// Test: lenient loads skip bad rows and keep the rest
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn lenient_load_skips_invalid_and_duplicate_rows(pool: PgPool) {
    let service = service(&pool).await;
    let file = catalog_file(&[
        &row("ABCDUS33XXX"),
        &row("not-a-bic"),
        &row("ABCDUS33ABC"),
        &row("ABCDUS33XXX"),
    ]);

    let summary = loader::load_catalog(&service, file.path(), ValidationPolicy::Lenient)
        .await
        .unwrap();

    assert_eq!(summary.total_rows, 4);
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped_invalid, 2);
    assert_eq!(service.count().await.unwrap(), 2);
}

// ---------------------------------------------------------------------------
// Test: strict loads abort on the first bad row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn strict_load_aborts_on_first_invalid_row(pool: PgPool) {
    let service = service(&pool).await;
    let file = catalog_file(&[&row("ABCDUS33XXX"), &row("not-a-bic")]);

    let err = loader::load_catalog(&service, file.path(), ValidationPolicy::Strict)
        .await
        .unwrap_err();

    assert_matches!(
        err,
        LoadError::Parse(ParseError::InvalidRecord { row: 2, .. })
    );
    assert_eq!(service.count().await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: missing file is an open error
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn missing_file_is_an_open_error(pool: PgPool) {
    let service = service(&pool).await;

    let err = loader::load_catalog(
        &service,
        Path::new("/nonexistent/swift_codes.csv"),
        ValidationPolicy::Lenient,
    )
    .await
    .unwrap_err();

    assert_matches!(err, LoadError::Open(_));
}

// ---------------------------------------------------------------------------
// Test: a renamed header column fails before any parsing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn renamed_header_column_is_a_read_error(pool: PgPool) {
    let service = service(&pool).await;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "COUNTRY ISO2 CODE,BIC,CODE TYPE,NAME,ADDRESS,TOWN NAME,COUNTRY NAME,TIME ZONE"
    )
    .unwrap();
    writeln!(file, "{}", row("ABCDUS33XXX")).unwrap();
    file.flush().unwrap();

    let err = loader::load_catalog(&service, file.path(), ValidationPolicy::Lenient)
        .await
        .unwrap_err();

    assert_matches!(err, LoadError::Read(ReadError::HeaderMismatch { .. }));
}

// ---------------------------------------------------------------------------
// Test: a header-only file yields no valid records
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn header_only_file_has_no_valid_records(pool: PgPool) {
    let service = service(&pool).await;
    let file = catalog_file(&[]);

    let err = loader::load_catalog(&service, file.path(), ValidationPolicy::Lenient)
        .await
        .unwrap_err();

    assert_matches!(err, LoadError::Parse(ParseError::NoValidRecords));
}
