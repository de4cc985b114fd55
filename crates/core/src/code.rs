//! SWIFT/BIC code rules: format checks, base derivation and the
//! headquarters/branch distinction.
//!
//! A code is 8 or 11 characters: a 4-letter institution, a 2-letter
//! country, a 2-character location, and an optional 3-character branch
//! suffix. The literal suffix `XXX` marks a headquarters record.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Longest accepted code. The BIC standard caps codes at 11 characters;
/// the store column leaves slack for plausible-but-dirty data.
pub const MAX_SWIFT_CODE_LENGTH: usize = 15;

/// Length of the prefix shared by a headquarters and its branches.
pub const SWIFT_CODE_BASE_LENGTH: usize = 8;

/// Branch suffix marking a headquarters record.
pub const HEADQUARTERS_SUFFIX: &str = "XXX";

static SWIFT_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("valid regex")
});

static COUNTRY_ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub(crate) fn check_swift_code(code: &str) -> Result<(), String> {
    if code.is_empty() {
        return Err("must not be empty".to_string());
    }
    if code.len() > MAX_SWIFT_CODE_LENGTH {
        return Err(format!("exceeds {MAX_SWIFT_CODE_LENGTH} characters"));
    }
    if !SWIFT_CODE_RE.is_match(code) {
        return Err("does not match the BIC format".to_string());
    }
    Ok(())
}

pub(crate) fn check_country_iso_code(country: &str) -> Result<(), String> {
    if country.is_empty() {
        return Err("must not be empty".to_string());
    }
    if !COUNTRY_ISO_RE.is_match(country) {
        return Err("must be two uppercase letters".to_string());
    }
    Ok(())
}

/// Validate an already-uppercased code against the BIC format.
pub fn validate_swift_code(code: &str) -> CoreResult<()> {
    check_swift_code(code)
        .map_err(|reason| CoreError::InvalidInput(format!("swift code '{code}' {reason}")))
}

/// Validate an already-uppercased ISO2 country code.
pub fn validate_country_iso_code(country: &str) -> CoreResult<()> {
    check_country_iso_code(country)
        .map_err(|reason| CoreError::InvalidInput(format!("country code '{country}' {reason}")))
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// First eight characters of a code, shared between a headquarters and its
/// branches. Codes shorter than the base are rejected, never padded.
pub fn swift_code_base(code: &str) -> CoreResult<&str> {
    code.get(..SWIFT_CODE_BASE_LENGTH).ok_or_else(|| {
        CoreError::InvalidInput(format!(
            "swift code '{code}' is shorter than {SWIFT_CODE_BASE_LENGTH} characters"
        ))
    })
}

/// Whether a record denotes a bank's headquarters or one of its branches.
///
/// Derived from the code's branch suffix, never supplied by callers.
/// Serialized as `"HEADQUARTERS"` / `"BRANCH"`; the store keeps a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankKind {
    Headquarters,
    Branch,
}

impl BankKind {
    /// Derive the kind from a code's trailing characters.
    pub fn of_code(code: &str) -> Self {
        if code.ends_with(HEADQUARTERS_SUFFIX) {
            BankKind::Headquarters
        } else {
            BankKind::Branch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BankKind::Headquarters => "HEADQUARTERS",
            BankKind::Branch => "BRANCH",
        }
    }

    pub fn is_headquarters(&self) -> bool {
        matches!(self, BankKind::Headquarters)
    }
}

impl fmt::Display for BankKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
