//! Row model and aggregates for the catalog table.

use serde::Deserialize;
use sqlx::FromRow;
use swiftdex_core::{BankKind, SwiftBank};

/// One stored catalog row. The boolean column is the storage mapping of
/// [`BankKind`]; conversions derive one from the other so the two
/// conventions never live on the same type.
#[derive(Debug, Clone, FromRow)]
pub struct SwiftBankRow {
    pub swift_code: String,
    pub swift_code_base: String,
    pub country_iso_code: String,
    pub bank_name: String,
    pub is_headquarters: bool,
    pub address: String,
    pub country_name: String,
}

impl From<SwiftBankRow> for SwiftBank {
    fn from(row: SwiftBankRow) -> Self {
        let kind = if row.is_headquarters {
            BankKind::Headquarters
        } else {
            BankKind::Branch
        };
        SwiftBank {
            swift_code: row.swift_code,
            swift_code_base: row.swift_code_base,
            country_iso_code: row.country_iso_code,
            bank_name: row.bank_name,
            kind,
            address: row.address,
            country_name: row.country_name,
        }
    }
}

/// Create request as accepted from callers.
///
/// The derived fields are optional; the service recomputes them from the
/// code and ignores supplied values that disagree.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSwiftBank {
    pub swift_code: String,
    pub country_iso_code: String,
    pub bank_name: String,
    pub address: String,
    pub country_name: String,
    #[serde(default)]
    pub swift_code_base: Option<String>,
    #[serde(default)]
    pub kind: Option<BankKind>,
}

/// Point-lookup result. `branches` is populated for headquarters records
/// and empty for branch records.
#[derive(Debug)]
pub struct SwiftBankWithBranches {
    pub bank: SwiftBank,
    pub branches: Vec<SwiftBank>,
}

/// Country listing. The display name comes from the first row in code
/// order.
#[derive(Debug)]
pub struct CountrySwiftBanks {
    pub country_iso_code: String,
    pub country_name: String,
    pub banks: Vec<SwiftBank>,
}

/// Outcome of a chunked batch insert. `total - inserted` rows were
/// already present and skipped by the conflict clause.
#[derive(Debug, Clone, Copy)]
pub struct BatchReport {
    pub inserted: u64,
    pub total: usize,
}
