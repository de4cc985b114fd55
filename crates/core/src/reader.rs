//! CSV record reader for the catalog interchange format.
//!
//! The reader enforces the header contract and row shape and trims every
//! field; it does no domain validation. Records keep their 1-based
//! data-row index so later stages can point at the offending line.

use std::fmt;
use std::io::Read;

use csv::StringRecord;
use thiserror::Error;

/// Column order every catalog file must carry. Matching is
/// case-insensitive after trimming.
pub const EXPECTED_HEADER: [&str; 8] = [
    "COUNTRY ISO2 CODE",
    "SWIFT CODE",
    "CODE TYPE",
    "NAME",
    "ADDRESS",
    "TOWN NAME",
    "COUNTRY NAME",
    "TIME ZONE",
];

const FIELDS_PER_ROW: usize = EXPECTED_HEADER.len();

/// Where in the input a source failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPhase {
    Header,
    /// 1-based data-row index.
    Row(usize),
}

impl fmt::Display for ReadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadPhase::Header => write!(f, "reading header"),
            ReadPhase::Row(row) => write!(f, "reading row {row}"),
        }
    }
}

/// Reader failures.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Zero bytes before any header row.
    #[error("empty input")]
    EmptyInput,

    /// The first row does not match [`EXPECTED_HEADER`].
    #[error("header mismatch: {detail}")]
    HeaderMismatch { detail: String },

    /// A data row with the wrong number of fields; `row` is 1-based.
    #[error("invalid length of row {row}")]
    RowShape { row: usize },

    /// The underlying source failed mid-read.
    #[error("source error while {phase}: {source}")]
    Source {
        phase: ReadPhase,
        #[source]
        source: csv::Error,
    },
}

/// One raw catalog row with its 1-based data-row index. Fields are
/// trimmed; the CODE TYPE, TOWN NAME and TIME ZONE columns are checked
/// for shape but not carried forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftBankRecord {
    pub index: usize,
    pub country_iso_code: String,
    pub swift_code: String,
    pub bank_name: String,
    pub address: String,
    pub country_name: String,
}

/// Read and shape-check all records from `input`.
///
/// Header-only input is valid and yields an empty vector; zero-byte input
/// is [`ReadError::EmptyInput`].
pub fn read_records<R: Read>(input: R) -> Result<Vec<SwiftBankRecord>, ReadError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = reader.into_records();

    let header = match rows.next() {
        None => return Err(ReadError::EmptyInput),
        Some(Err(source)) => {
            return Err(ReadError::Source {
                phase: ReadPhase::Header,
                source,
            })
        }
        Some(Ok(record)) => record,
    };
    check_header(&header)?;

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        let index = i + 1;
        let row = row.map_err(|source| ReadError::Source {
            phase: ReadPhase::Row(index),
            source,
        })?;
        if row.len() != FIELDS_PER_ROW {
            return Err(ReadError::RowShape { row: index });
        }

        let field = |n: usize| row.get(n).unwrap_or("").trim().to_string();
        records.push(SwiftBankRecord {
            index,
            country_iso_code: field(0),
            swift_code: field(1),
            bank_name: field(3),
            address: field(4),
            country_name: field(6),
        });
    }

    Ok(records)
}

fn check_header(header: &StringRecord) -> Result<(), ReadError> {
    if header.len() != FIELDS_PER_ROW {
        return Err(ReadError::HeaderMismatch {
            detail: format!(
                "expected {FIELDS_PER_ROW} columns, got {}",
                header.len()
            ),
        });
    }
    for (got, want) in header.iter().zip(EXPECTED_HEADER) {
        if !got.trim().eq_ignore_ascii_case(want) {
            return Err(ReadError::HeaderMismatch {
                detail: format!("expected column '{want}', got '{}'", got.trim()),
            });
        }
    }
    Ok(())
}
