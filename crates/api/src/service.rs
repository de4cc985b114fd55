//! Transport-independent catalog operations.
//!
//! Every operation validates and normalizes caller input before touching
//! the store, then translates repository errors into domain errors. No
//! HTTP types appear here; handlers and the startup loader are thin
//! callers.

use swiftdex_core::{code, parser, CoreError, CoreResult, SwiftBank};
use swiftdex_db::models::swift_bank::{
    BatchReport, CountrySwiftBanks, CreateSwiftBank, SwiftBankWithBranches,
};
use swiftdex_db::repositories::SwiftBankRepo;
use swiftdex_db::{DbPool, RepoError};
use tracing::{debug, info};

/// Catalog operations shared by the HTTP handlers and the startup loader.
pub struct SwiftCodeService {
    pool: DbPool,
    repo: SwiftBankRepo,
}

impl SwiftCodeService {
    pub fn new(pool: DbPool, repo: SwiftBankRepo) -> Self {
        Self { pool, repo }
    }

    /// Point lookup by code; a headquarters result carries its branches.
    pub async fn lookup(&self, code: &str) -> CoreResult<SwiftBankWithBranches> {
        let code = code.trim().to_uppercase();
        code::validate_swift_code(&code)?;
        self.repo
            .get_by_code(&self.pool, &code)
            .await
            .map_err(|err| translate(err, "swift code", &code))
    }

    /// All records for one ISO2 country code.
    pub async fn lookup_by_country(&self, country: &str) -> CoreResult<CountrySwiftBanks> {
        let country = country.trim().to_uppercase();
        code::validate_country_iso_code(&country)?;
        self.repo
            .get_by_country(&self.pool, &country)
            .await
            .map_err(|err| translate(err, "country", &country))
    }

    /// Validate and store one record, returning it as stored.
    ///
    /// The base and kind are recomputed from the code; supplied values
    /// that disagree are ignored.
    pub async fn create(&self, request: CreateSwiftBank) -> CoreResult<SwiftBank> {
        let bank = normalize_request(&request)?;
        self.repo
            .create(&self.pool, &bank)
            .await
            .map_err(|err| translate(err, "swift code", &bank.swift_code))?;
        info!(swift_code = %bank.swift_code, kind = %bank.kind, "swift code created");
        Ok(bank)
    }

    /// Remove one record by code.
    pub async fn delete(&self, code: &str) -> CoreResult<()> {
        let code = code.trim().to_uppercase();
        code::validate_swift_code(&code)?;
        self.repo
            .delete(&self.pool, &code)
            .await
            .map_err(|err| translate(err, "swift code", &code))?;
        info!(swift_code = %code, "swift code deleted");
        Ok(())
    }

    /// Bulk ingestion path used at startup. Codes already stored are
    /// skipped row-by-row; the report carries inserted vs. requested.
    pub async fn load_batch(&self, banks: &[SwiftBank]) -> CoreResult<BatchReport> {
        self.repo
            .create_batch(&self.pool, banks)
            .await
            .map_err(|err| translate(err, "batch", ""))
    }

    /// Stored record count, for startup reporting and the health probe.
    pub async fn count(&self) -> CoreResult<i64> {
        self.repo
            .count(&self.pool)
            .await
            .map_err(|err| translate(err, "catalog", ""))
    }
}

/// Validate a create request field-by-field and assemble the canonical
/// record.
fn normalize_request(request: &CreateSwiftBank) -> CoreResult<SwiftBank> {
    let swift_code = request.swift_code.trim().to_uppercase();
    code::validate_swift_code(&swift_code)?;

    let bank_name = parser::sanitize_bank_name(&request.bank_name);
    parser::validate_bank_name(&bank_name)?;

    let country_iso_code = request.country_iso_code.trim().to_uppercase();
    code::validate_country_iso_code(&country_iso_code)?;

    let address = request.address.trim().to_string();
    parser::validate_address(&address)?;

    let country_name = request.country_name.trim().to_string();
    parser::validate_country_name(&country_name)?;

    let bank = SwiftBank::from_parts(
        &swift_code,
        &country_iso_code,
        bank_name,
        address,
        country_name,
    )?;

    if let Some(kind) = request.kind {
        if kind != bank.kind {
            debug!(supplied = %kind, derived = %bank.kind, "ignoring supplied kind");
        }
    }
    if let Some(base) = &request.swift_code_base {
        if !base.eq_ignore_ascii_case(&bank.swift_code_base) {
            debug!(supplied = %base, derived = %bank.swift_code_base, "ignoring supplied base");
        }
    }

    Ok(bank)
}

fn translate(err: RepoError, entity: &'static str, key: &str) -> CoreError {
    match err {
        RepoError::NotFound => CoreError::NotFound {
            entity,
            key: key.to_string(),
        },
        RepoError::Duplicate => CoreError::AlreadyExists(format!("{entity} '{key}'")),
        other => CoreError::Internal(other.to_string()),
    }
}
