//! Handlers for the `/swift-codes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use swiftdex_core::SwiftBank;
use swiftdex_db::models::swift_bank::{CountrySwiftBanks, CreateSwiftBank, SwiftBankWithBranches};

use crate::error::AppResult;
use crate::state::AppState;

/// Response body for a single code lookup.
///
/// The `branches` key is present only on headquarters records; branch
/// records serialize the flat entity alone.
#[derive(Debug, Serialize)]
pub struct SwiftCodeResponse {
    #[serde(flatten)]
    pub bank: SwiftBank,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<SwiftBank>>,
}

impl From<SwiftBankWithBranches> for SwiftCodeResponse {
    fn from(found: SwiftBankWithBranches) -> Self {
        let branches = found.bank.is_headquarters().then_some(found.branches);
        Self {
            bank: found.bank,
            branches,
        }
    }
}

/// Response body for a country listing.
#[derive(Debug, Serialize)]
pub struct CountrySwiftCodesResponse {
    pub country_iso_code: String,
    pub country_name: String,
    pub swift_codes: Vec<SwiftBank>,
}

impl From<CountrySwiftBanks> for CountrySwiftCodesResponse {
    fn from(listing: CountrySwiftBanks) -> Self {
        Self {
            country_iso_code: listing.country_iso_code,
            country_name: listing.country_name,
            swift_codes: listing.banks,
        }
    }
}

/// GET /api/v1/swift-codes/{code}
///
/// Look up a single record. Headquarters responses embed their branches.
pub async fn get_swift_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<SwiftCodeResponse>> {
    let found = state.service.lookup(&code).await?;
    Ok(Json(found.into()))
}

/// GET /api/v1/swift-codes/country/{country}
///
/// List every record registered under one ISO2 country code.
pub async fn get_swift_codes_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> AppResult<Json<CountrySwiftCodesResponse>> {
    let listing = state.service.lookup_by_country(&country).await?;
    Ok(Json(listing.into()))
}

/// POST /api/v1/swift-codes
///
/// Validate and store one record; returns it as stored.
pub async fn create_swift_code(
    State(state): State<AppState>,
    Json(request): Json<CreateSwiftBank>,
) -> AppResult<(StatusCode, Json<SwiftBank>)> {
    let bank = state.service.create(request).await?;
    Ok((StatusCode::CREATED, Json(bank)))
}

/// DELETE /api/v1/swift-codes/{code}
pub async fn delete_swift_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.service.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
