//! Integration tests for the catalog repository.
//!
//! Each test gets its own database from `#[sqlx::test]`; the catalog
//! table is bootstrapped explicitly since schema creation is part of the
//! crate under test.

use assert_matches::assert_matches;
use sqlx::PgPool;
use swiftdex_core::{BankKind, SwiftBank};
use swiftdex_db::repositories::SwiftBankRepo;
use swiftdex_db::RepoError;

const TABLE: &str = "swift_banks";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn repo() -> SwiftBankRepo {
    SwiftBankRepo::new(TABLE.to_string(), 100)
}

fn bank(code: &str, country: &str, country_name: &str) -> SwiftBank {
    SwiftBank::from_parts(
        code,
        country,
        format!("{code} Bank"),
        "1 Test Street".to_string(),
        country_name.to_string(),
    )
    .unwrap()
}

async fn setup(pool: &PgPool) {
    swiftdex_db::ensure_schema(pool, TABLE).await.unwrap();
}

// ---------------------------------------------------------------------------
// Point lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn create_and_get_round_trip(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();

    repo.create(&pool, &bank("ABCDUS33XXX", "US", "United States"))
        .await
        .unwrap();

    // Lookup is case-insensitive on the code.
    let found = repo.get_by_code(&pool, "abcdus33xxx").await.unwrap();
    assert_eq!(found.bank.swift_code, "ABCDUS33XXX");
    assert_eq!(found.bank.swift_code_base, "ABCDUS33");
    assert_eq!(found.bank.kind, BankKind::Headquarters);
    assert_eq!(found.bank.bank_name, "ABCDUS33XXX Bank");
}

#[sqlx::test(migrations = false)]
async fn headquarters_lookup_includes_its_branches(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();

    for code in ["ABCDUS33XXX", "ABCDUS33ABC", "ABCDUS33DEF", "CHASUS33"] {
        repo.create(&pool, &bank(code, "US", "United States"))
            .await
            .unwrap();
    }

    let found = repo.get_by_code(&pool, "ABCDUS33XXX").await.unwrap();
    let branch_codes: Vec<&str> = found
        .branches
        .iter()
        .map(|b| b.swift_code.as_str())
        .collect();
    assert_eq!(branch_codes, vec!["ABCDUS33ABC", "ABCDUS33DEF"]);
}

#[sqlx::test(migrations = false)]
async fn branch_lookup_carries_no_branches(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();

    repo.create(&pool, &bank("ABCDUS33XXX", "US", "United States"))
        .await
        .unwrap();
    repo.create(&pool, &bank("ABCDUS33ABC", "US", "United States"))
        .await
        .unwrap();

    let found = repo.get_by_code(&pool, "ABCDUS33ABC").await.unwrap();
    assert_eq!(found.bank.kind, BankKind::Branch);
    assert!(found.branches.is_empty());
}

#[sqlx::test(migrations = false)]
async fn missing_code_is_not_found(pool: PgPool) {
    setup(&pool).await;
    let err = repo().get_by_code(&pool, "ZZZZUS00XXX").await.unwrap_err();
    assert_matches!(err, RepoError::NotFound);
}

// ---------------------------------------------------------------------------
// Country listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn country_listing_returns_all_rows_and_a_sampled_name(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();

    repo.create(&pool, &bank("CHASUS33", "US", "United States"))
        .await
        .unwrap();
    repo.create(&pool, &bank("ABCDUS33XXX", "US", "United States"))
        .await
        .unwrap();
    repo.create(&pool, &bank("BREXPLPWXXX", "PL", "Poland"))
        .await
        .unwrap();

    let listing = repo.get_by_country(&pool, "us").await.unwrap();
    assert_eq!(listing.country_iso_code, "US");
    assert_eq!(listing.country_name, "United States");
    assert_eq!(listing.banks.len(), 2);
}

#[sqlx::test(migrations = false)]
async fn disagreeing_country_names_resolve_to_the_first_row(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();

    // Dirty data: two rows for DE spell the country differently.
    repo.create(&pool, &bank("ZYXWDE33", "DE", "Deutschland"))
        .await
        .unwrap();
    repo.create(&pool, &bank("AAAADE33", "DE", "Germany"))
        .await
        .unwrap();

    let listing = repo.get_by_country(&pool, "DE").await.unwrap();
    assert_eq!(listing.country_name, "Germany");
    assert_eq!(listing.banks.len(), 2);
}

#[sqlx::test(migrations = false)]
async fn country_without_rows_is_not_found(pool: PgPool) {
    setup(&pool).await;
    let err = repo().get_by_country(&pool, "DE").await.unwrap_err();
    assert_matches!(err, RepoError::NotFound);
}

// ---------------------------------------------------------------------------
// Single insert / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn duplicate_create_is_reported_by_the_constraint(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();
    let record = bank("ABCDUS33XXX", "US", "United States");

    repo.create(&pool, &record).await.unwrap();
    let err = repo.create(&pool, &record).await.unwrap_err();
    assert_matches!(err, RepoError::Duplicate);
}

#[sqlx::test(migrations = false)]
async fn delete_is_not_repeatable(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();

    repo.create(&pool, &bank("ABCDUS33XXX", "US", "United States"))
        .await
        .unwrap();

    repo.delete(&pool, "abcdus33xxx").await.unwrap();
    let err = repo.delete(&pool, "ABCDUS33XXX").await.unwrap_err();
    assert_matches!(err, RepoError::NotFound);
}

#[sqlx::test(migrations = false)]
async fn exists_probe_tracks_inserts_and_deletes(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();

    assert!(!repo.exists(&pool, "ABCDUS33XXX").await.unwrap());
    repo.create(&pool, &bank("ABCDUS33XXX", "US", "United States"))
        .await
        .unwrap();
    assert!(repo.exists(&pool, "abcdus33xxx").await.unwrap());

    repo.delete(&pool, "ABCDUS33XXX").await.unwrap();
    assert!(!repo.exists(&pool, "ABCDUS33XXX").await.unwrap());
}

// ---------------------------------------------------------------------------
// Batched insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn batch_insert_spans_chunks(pool: PgPool) {
    setup(&pool).await;
    // Chunk size 2 forces three statements for five rows.
    let repo = SwiftBankRepo::new(TABLE.to_string(), 2);

    let banks: Vec<SwiftBank> = ["AAAAUS33", "BBBBUS33", "CCCCUS33", "DDDDUS33", "EEEEUS33"]
        .iter()
        .map(|code| bank(code, "US", "United States"))
        .collect();

    let report = repo.create_batch(&pool, &banks).await.unwrap();
    assert_eq!(report.inserted, 5);
    assert_eq!(report.total, 5);
    assert_eq!(repo.count(&pool).await.unwrap(), 5);
}

#[sqlx::test(migrations = false)]
async fn batch_rerun_inserts_nothing(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();

    let banks: Vec<SwiftBank> = ["AAAAUS33", "BBBBUS33"]
        .iter()
        .map(|code| bank(code, "US", "United States"))
        .collect();

    repo.create_batch(&pool, &banks).await.unwrap();
    let rerun = repo.create_batch(&pool, &banks).await.unwrap();
    assert_eq!(rerun.inserted, 0);
    assert_eq!(rerun.total, 2);
    assert_eq!(repo.count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = false)]
async fn batch_skips_rows_already_present(pool: PgPool) {
    setup(&pool).await;
    let repo = repo();

    repo.create(&pool, &bank("AAAAUS33", "US", "United States"))
        .await
        .unwrap();

    let banks = vec![
        bank("AAAAUS33", "US", "United States"),
        bank("BBBBUS33", "US", "United States"),
    ];
    let report = repo.create_batch(&pool, &banks).await.unwrap();
    assert_eq!(report.inserted, 1);
    assert_eq!(report.total, 2);
}

#[sqlx::test(migrations = false)]
async fn failing_chunk_aborts_and_reports_committed_rows(pool: PgPool) {
    setup(&pool).await;
    // Chunk size 1 gives every row its own statement.
    let repo = SwiftBankRepo::new(TABLE.to_string(), 1);

    let mut banks = vec![
        bank("AAAAUS33", "US", "United States"),
        bank("BBBBUS33", "US", "United States"),
        bank("CCCCUS33", "US", "United States"),
    ];
    // The second row overflows the bank_name column and fails its chunk.
    banks[1].bank_name = "B".repeat(120);

    let err = repo.create_batch(&pool, &banks).await.unwrap_err();
    assert_matches!(
        err,
        RepoError::BatchAborted {
            committed: 1,
            total: 3,
            ..
        }
    );

    // The chunk before the failure stays committed; nothing after it ran.
    assert!(repo.exists(&pool, "AAAAUS33").await.unwrap());
    assert!(!repo.exists(&pool, "BBBBUS33").await.unwrap());
    assert!(!repo.exists(&pool, "CCCCUS33").await.unwrap());
}

#[sqlx::test(migrations = false)]
async fn empty_batch_is_a_no_op(pool: PgPool) {
    setup(&pool).await;
    let report = repo().create_batch(&pool, &[]).await.unwrap();
    assert_eq!(report.inserted, 0);
    assert_eq!(report.total, 0);
}
