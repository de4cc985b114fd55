//! Canonical bank identifier record.

use serde::{Deserialize, Serialize};

use crate::code::{self, BankKind};
use crate::error::CoreResult;

/// A validated catalog entry.
///
/// `swift_code_base` and `kind` are derived from the code; they are never
/// taken from input. A headquarters shares its base with its branches and
/// is the only record for that base carrying the `XXX` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftBank {
    pub swift_code: String,
    pub swift_code_base: String,
    pub country_iso_code: String,
    pub bank_name: String,
    pub kind: BankKind,
    pub address: String,
    pub country_name: String,
}

impl SwiftBank {
    /// Assemble a record from validated fields, uppercasing the code and
    /// country and deriving the base and kind.
    pub fn from_parts(
        swift_code: &str,
        country_iso_code: &str,
        bank_name: String,
        address: String,
        country_name: String,
    ) -> CoreResult<Self> {
        let swift_code = swift_code.trim().to_uppercase();
        let country_iso_code = country_iso_code.trim().to_uppercase();
        let swift_code_base = code::swift_code_base(&swift_code)?.to_string();
        let kind = BankKind::of_code(&swift_code);

        Ok(SwiftBank {
            swift_code,
            swift_code_base,
            country_iso_code,
            bank_name,
            kind,
            address,
            country_name,
        })
    }

    pub fn is_headquarters(&self) -> bool {
        self.kind.is_headquarters()
    }
}
