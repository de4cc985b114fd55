//! Validation and normalization of raw catalog records.
//!
//! A pure transform: raw [`SwiftBankRecord`]s in, canonical [`SwiftBank`]s
//! plus a list of dropped rows out. The caller decides what to do with the
//! drops (the startup loader logs them).

use std::collections::HashSet;

use thiserror::Error;

use crate::bank::SwiftBank;
use crate::code;
use crate::error::{CoreError, CoreResult};
use crate::reader::SwiftBankRecord;

pub const MAX_BANK_NAME_LENGTH: usize = 100;
pub const MAX_ADDRESS_LENGTH: usize = 200;
pub const MAX_COUNTRY_NAME_LENGTH: usize = 100;

/// How invalid records in a batch are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// The first invalid record aborts the whole batch.
    Strict,
    /// Invalid records are skipped and reported in the outcome.
    #[default]
    Lenient,
}

impl ValidationPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Some(ValidationPolicy::Strict),
            "lenient" => Some(ValidationPolicy::Lenient),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationPolicy::Strict => "strict",
            ValidationPolicy::Lenient => "lenient",
        }
    }
}

/// A record excluded from the outcome, with the offending field and value
/// for the caller's logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based data-row index.
    pub row: usize,
    pub field: &'static str,
    pub value: String,
    pub reason: String,
}

/// Parser failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Strict policy: the first invalid record aborts the batch.
    #[error("invalid {field} '{value}' at row {row}: {reason}")]
    InvalidRecord {
        row: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// No record survived validation.
    #[error("no valid records in input")]
    NoValidRecords,
}

/// Surviving entities plus the records dropped on the way: invalid rows
/// under the lenient policy, and in-batch duplicates under either policy.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub banks: Vec<SwiftBank>,
    pub skipped: Vec<SkippedRecord>,
}

struct FieldIssue {
    field: &'static str,
    value: String,
    reason: String,
}

/// Validate and normalize raw records into catalog entities.
///
/// Field checks run in a fixed order per record: swift code, bank name,
/// country code, address, country name. A repeated swift code within the
/// batch keeps the first occurrence and skips the rest regardless of
/// policy.
pub fn parse_records(
    records: &[SwiftBankRecord],
    policy: ValidationPolicy,
) -> Result<ParseOutcome, ParseError> {
    let mut outcome = ParseOutcome::default();
    let mut seen: HashSet<String> = HashSet::new();

    for record in records {
        let bank = match convert(record) {
            Ok(bank) => bank,
            Err(issue) => {
                if policy == ValidationPolicy::Strict {
                    return Err(ParseError::InvalidRecord {
                        row: record.index,
                        field: issue.field,
                        value: issue.value,
                        reason: issue.reason,
                    });
                }
                outcome.skipped.push(SkippedRecord {
                    row: record.index,
                    field: issue.field,
                    value: issue.value,
                    reason: issue.reason,
                });
                continue;
            }
        };

        if !seen.insert(bank.swift_code.clone()) {
            outcome.skipped.push(SkippedRecord {
                row: record.index,
                field: "swift_code",
                value: bank.swift_code.clone(),
                reason: "duplicate code within batch".to_string(),
            });
            continue;
        }
        outcome.banks.push(bank);
    }

    if outcome.banks.is_empty() {
        return Err(ParseError::NoValidRecords);
    }
    Ok(outcome)
}

fn convert(record: &SwiftBankRecord) -> Result<SwiftBank, FieldIssue> {
    let swift_code = record.swift_code.trim().to_uppercase();
    let bank_name = sanitize_bank_name(&record.bank_name);
    let country_iso_code = record.country_iso_code.trim().to_uppercase();
    let address = record.address.trim().to_string();
    let country_name = record.country_name.trim().to_string();

    field_check("swift_code", &swift_code, code::check_swift_code(&swift_code))?;
    field_check("bank_name", &bank_name, check_bank_name(&bank_name))?;
    field_check(
        "country_iso_code",
        &country_iso_code,
        code::check_country_iso_code(&country_iso_code),
    )?;
    field_check("address", &address, check_address(&address))?;
    field_check("country_name", &country_name, check_country_name(&country_name))?;

    SwiftBank::from_parts(&swift_code, &country_iso_code, bank_name, address, country_name)
        .map_err(|err| FieldIssue {
            field: "swift_code",
            value: swift_code.clone(),
            reason: err.to_string(),
        })
}

fn field_check(
    field: &'static str,
    value: &str,
    result: Result<(), String>,
) -> Result<(), FieldIssue> {
    result.map_err(|reason| FieldIssue {
        field,
        value: value.to_string(),
        reason,
    })
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Strip control characters and collapse whitespace runs to single spaces.
pub fn sanitize_bank_name(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| !c.is_control()).collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn check_bank_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("must not be empty".to_string());
    }
    if name.len() > MAX_BANK_NAME_LENGTH {
        return Err(format!("exceeds {MAX_BANK_NAME_LENGTH} characters"));
    }
    Ok(())
}

fn check_address(address: &str) -> Result<(), String> {
    if address.is_empty() {
        return Err("must not be empty".to_string());
    }
    if address.len() > MAX_ADDRESS_LENGTH {
        return Err(format!("exceeds {MAX_ADDRESS_LENGTH} characters"));
    }
    Ok(())
}

fn check_country_name(country_name: &str) -> Result<(), String> {
    if country_name.is_empty() {
        return Err("must not be empty".to_string());
    }
    if country_name.len() > MAX_COUNTRY_NAME_LENGTH {
        return Err(format!("exceeds {MAX_COUNTRY_NAME_LENGTH} characters"));
    }
    Ok(())
}

/// Validate an already-sanitized bank name.
pub fn validate_bank_name(name: &str) -> CoreResult<()> {
    check_bank_name(name).map_err(|reason| CoreError::InvalidInput(format!("bank name {reason}")))
}

pub fn validate_address(address: &str) -> CoreResult<()> {
    check_address(address).map_err(|reason| CoreError::InvalidInput(format!("address {reason}")))
}

pub fn validate_country_name(country_name: &str) -> CoreResult<()> {
    check_country_name(country_name)
        .map_err(|reason| CoreError::InvalidInput(format!("country name {reason}")))
}
