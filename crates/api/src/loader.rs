//! CSV catalog bootstrap.
//!
//! Reads the configured SWIFT catalog file, parses it under the
//! configured policy, and bulk-loads the surviving records. Re-running
//! against a populated store is safe; already-present codes are skipped.

use std::fs::File;
use std::io;
use std::path::Path;

use swiftdex_core::parser::{self, ParseError, ValidationPolicy};
use swiftdex_core::reader::{self, ReadError};
use swiftdex_core::CoreError;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::CatalogConfig;
use crate::service::SwiftCodeService;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open catalog file: {0}")]
    Open(#[from] io::Error),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] CoreError),
}

/// What one load run did, for startup logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadSummary {
    /// Data rows in the file, before validation.
    pub total_rows: usize,
    /// Rows newly written to the store.
    pub inserted: u64,
    /// Valid rows whose code was already stored.
    pub already_present: u64,
    /// Rows dropped by lenient validation or in-batch deduplication.
    pub skipped_invalid: usize,
}

/// Load one catalog file into the store.
pub async fn load_catalog(
    service: &SwiftCodeService,
    path: &Path,
    policy: ValidationPolicy,
) -> Result<LoadSummary, LoadError> {
    let file = File::open(path)?;
    let records = reader::read_records(file)?;
    let outcome = parser::parse_records(&records, policy)?;

    for skip in &outcome.skipped {
        warn!(
            row = skip.row,
            field = skip.field,
            value = %skip.value,
            reason = %skip.reason,
            "skipping invalid catalog row"
        );
    }

    let report = service.load_batch(&outcome.banks).await?;
    Ok(LoadSummary {
        total_rows: records.len(),
        inserted: report.inserted,
        already_present: report.total as u64 - report.inserted,
        skipped_invalid: outcome.skipped.len(),
    })
}

/// Startup hook: load the configured file unless auto-load is off.
///
/// Load failures are logged and swallowed so the server still comes up
/// and serves whatever the store already holds.
pub async fn auto_load(service: &SwiftCodeService, config: &CatalogConfig) {
    if !config.auto_load {
        info!("catalog auto-load disabled");
        return;
    }

    let path = Path::new(&config.swift_codes_file);
    match load_catalog(service, path, config.load_policy).await {
        Ok(summary) => {
            info!(
                file = %path.display(),
                total_rows = summary.total_rows,
                inserted = summary.inserted,
                already_present = summary.already_present,
                skipped_invalid = summary.skipped_invalid,
                "catalog loaded"
            );
        }
        Err(err) => {
            warn!(
                file = %path.display(),
                error = %err,
                "catalog load failed; serving existing data"
            );
        }
    }

    match service.count().await {
        Ok(total) => info!(total, "swift codes available"),
        Err(err) => warn!(error = %err, "could not count stored swift codes"),
    }
}
