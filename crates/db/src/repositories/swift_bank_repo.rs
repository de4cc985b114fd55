//! Catalog repository: every read and write against the stored records.
//!
//! Write paths lean on the store's own guarantees instead of
//! check-then-act reads: the primary key reports duplicates via error
//! code 23505 and DELETE reports absence via its affected-row count.

use sqlx::QueryBuilder;
use swiftdex_core::SwiftBank;

use crate::error::{is_unique_violation, RepoError};
use crate::models::swift_bank::{
    BatchReport, CountrySwiftBanks, SwiftBankRow, SwiftBankWithBranches,
};
use crate::DbPool;

/// Column list shared by all queries returning a full catalog row.
const COLUMNS: &str =
    "swift_code, swift_code_base, country_iso_code, bank_name, is_headquarters, address, country_name";

/// Default rows per batched INSERT chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Data access for the configured catalog table.
///
/// The table name comes from configuration, validated there as a plain
/// identifier; it is interpolated into query strings because identifiers
/// cannot be bound as parameters.
#[derive(Debug, Clone)]
pub struct SwiftBankRepo {
    table: String,
    chunk_size: usize,
}

impl SwiftBankRepo {
    pub fn new(table: String, chunk_size: usize) -> Self {
        Self {
            table,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Point lookup by code. For a headquarters record the branches
    /// sharing its base are fetched as well.
    pub async fn get_by_code(
        &self,
        pool: &DbPool,
        code: &str,
    ) -> Result<SwiftBankWithBranches, RepoError> {
        let code = code.to_uppercase();
        let query = format!("SELECT {COLUMNS} FROM {} WHERE swift_code = $1", self.table);
        let row = sqlx::query_as::<_, SwiftBankRow>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await?;

        let bank: SwiftBank = match row {
            Some(row) => row.into(),
            None => return Err(RepoError::NotFound),
        };

        let branches = if bank.is_headquarters() {
            self.branches_of(pool, &bank.swift_code_base).await?
        } else {
            Vec::new()
        };

        Ok(SwiftBankWithBranches { bank, branches })
    }

    /// Branch records sharing a headquarters base. The headquarters row
    /// itself is excluded by its flag.
    async fn branches_of(&self, pool: &DbPool, base: &str) -> Result<Vec<SwiftBank>, RepoError> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE swift_code_base = $1 AND is_headquarters = FALSE ORDER BY swift_code",
            self.table
        );
        let rows = sqlx::query_as::<_, SwiftBankRow>(&query)
            .bind(base)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(SwiftBank::from).collect())
    }

    /// Every record for an ISO2 country code. Yields `NotFound` when the
    /// country has no rows.
    ///
    /// Stored rows for one ISO2 code may disagree on the display name;
    /// the first row in code order supplies it.
    pub async fn get_by_country(
        &self,
        pool: &DbPool,
        country: &str,
    ) -> Result<CountrySwiftBanks, RepoError> {
        let country = country.to_uppercase();
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE country_iso_code = $1 ORDER BY swift_code",
            self.table
        );
        let rows = sqlx::query_as::<_, SwiftBankRow>(&query)
            .bind(&country)
            .fetch_all(pool)
            .await?;
        if rows.is_empty() {
            return Err(RepoError::NotFound);
        }

        let country_name = rows[0].country_name.clone();
        Ok(CountrySwiftBanks {
            country_iso_code: country,
            country_name,
            banks: rows.into_iter().map(SwiftBank::from).collect(),
        })
    }

    /// Insert one record. A unique violation from the store is the
    /// authoritative duplicate signal.
    pub async fn create(&self, pool: &DbPool, bank: &SwiftBank) -> Result<(), RepoError> {
        let query = format!(
            "INSERT INTO {} ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7)",
            self.table
        );
        sqlx::query(&query)
            .bind(&bank.swift_code)
            .bind(&bank.swift_code_base)
            .bind(&bank.country_iso_code)
            .bind(&bank.bank_name)
            .bind(bank.is_headquarters())
            .bind(&bank.address)
            .bind(&bank.country_name)
            .execute(pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    RepoError::Duplicate
                } else {
                    RepoError::Database(err)
                }
            })?;
        Ok(())
    }

    /// Insert records in fixed-size chunks as multi-row statements.
    ///
    /// Already-present codes are skipped row-by-row by the conflict
    /// clause, so re-running a load is harmless. A failing chunk aborts
    /// the remainder; rows from earlier chunks stay committed and the
    /// error carries the committed count.
    pub async fn create_batch(
        &self,
        pool: &DbPool,
        banks: &[SwiftBank],
    ) -> Result<BatchReport, RepoError> {
        let mut inserted: u64 = 0;

        for chunk in banks.chunks(self.chunk_size) {
            let mut builder: QueryBuilder<sqlx::Postgres> =
                QueryBuilder::new(format!("INSERT INTO {} ({COLUMNS}) ", self.table));
            builder.push_values(chunk, |mut b, bank| {
                b.push_bind(&bank.swift_code)
                    .push_bind(&bank.swift_code_base)
                    .push_bind(&bank.country_iso_code)
                    .push_bind(&bank.bank_name)
                    .push_bind(bank.is_headquarters())
                    .push_bind(&bank.address)
                    .push_bind(&bank.country_name);
            });
            builder.push(" ON CONFLICT (swift_code) DO NOTHING");

            let result =
                builder
                    .build()
                    .execute(pool)
                    .await
                    .map_err(|source| RepoError::BatchAborted {
                        committed: inserted,
                        total: banks.len(),
                        source,
                    })?;
            inserted += result.rows_affected();
        }

        Ok(BatchReport {
            inserted,
            total: banks.len(),
        })
    }

    /// Delete by code. Zero affected rows means the code was absent.
    pub async fn delete(&self, pool: &DbPool, code: &str) -> Result<(), RepoError> {
        let code = code.to_uppercase();
        let query = format!("DELETE FROM {} WHERE swift_code = $1", self.table);
        let result = sqlx::query(&query).bind(code).execute(pool).await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    /// Existence probe by code.
    pub async fn exists(&self, pool: &DbPool, code: &str) -> Result<bool, RepoError> {
        let code = code.to_uppercase();
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE swift_code = $1)",
            self.table
        );
        let exists: bool = sqlx::query_scalar(&query).bind(code).fetch_one(pool).await?;
        Ok(exists)
    }

    /// Number of stored records.
    pub async fn count(&self, pool: &DbPool) -> Result<i64, RepoError> {
        let query = format!("SELECT COUNT(*) FROM {}", self.table);
        let count: i64 = sqlx::query_scalar(&query).fetch_one(pool).await?;
        Ok(count)
    }
}
