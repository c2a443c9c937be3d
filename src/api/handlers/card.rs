//! Card number handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::domain::{
    ApiResponse, BatchValidateRequest, BatchValidateResponse, CheckDigitResponse,
    GenerateResponse, ProfileListResponse, ValidationResponse,
};
use crate::error::{AppError, Result};

/// Query parameters for single-number validation.
#[derive(Debug, Deserialize)]
pub struct ValidateQuery {
    /// Card number as typed; spaces and hyphens allowed.
    #[serde(default)]
    pub number: String,
}

/// Query parameters for generation by card type.
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    /// Card profile name.
    #[serde(rename = "type", default)]
    pub card_type: String,

    /// Number of cards to generate (default from configuration).
    pub count: Option<u32>,
}

/// Query parameters for generation from a raw prefix.
#[derive(Debug, Deserialize)]
pub struct CustomGenerateQuery {
    /// Leading digits.
    #[serde(default)]
    pub prefix: String,

    /// Total length including the check digit.
    pub length: Option<usize>,

    /// Number of cards to generate (default from configuration).
    pub count: Option<u32>,
}

/// Query parameters for check digit computation.
#[derive(Debug, Deserialize)]
pub struct CheckDigitQuery {
    /// Number without its check digit.
    #[serde(default)]
    pub partial: String,
}

/// Validate a single card number.
pub async fn validate(
    State(state): State<AppState>,
    Query(query): Query<ValidateQuery>,
) -> Json<ApiResponse<ValidationResponse>> {
    Json(ApiResponse::success(
        state.card_service.validate(&query.number),
    ))
}

/// Validate a batch of card numbers.
pub async fn validate_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchValidateRequest>,
) -> Result<Json<ApiResponse<BatchValidateResponse>>> {
    let count = u32::try_from(request.numbers.len()).unwrap_or(u32::MAX);
    state.card_service.check_count(count)?;

    let results = request
        .numbers
        .iter()
        .map(|number| state.card_service.validate(number))
        .collect();

    Ok(Json(ApiResponse::success(BatchValidateResponse { results })))
}

/// Generate card numbers for a named card type.
pub async fn generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Result<Json<ApiResponse<GenerateResponse>>> {
    if query.card_type.trim().is_empty() {
        return Err(AppError::MissingParam("type"));
    }

    let count = query
        .count
        .unwrap_or(state.config.generator.default_count);
    let response = state.card_service.generate(&query.card_type, count)?;

    Ok(Json(ApiResponse::success(response)))
}

/// Generate card numbers from a raw prefix and length.
pub async fn generate_custom(
    State(state): State<AppState>,
    Query(query): Query<CustomGenerateQuery>,
) -> Result<Json<ApiResponse<GenerateResponse>>> {
    let length = query
        .length
        .ok_or(AppError::MissingParam("length"))?;

    let count = query
        .count
        .unwrap_or(state.config.generator.default_count);
    let response = state
        .card_service
        .generate_custom(&query.prefix, length, count)?;

    Ok(Json(ApiResponse::success(response)))
}

/// Compute the check digit for a partial number.
pub async fn check_digit(
    State(state): State<AppState>,
    Query(query): Query<CheckDigitQuery>,
) -> Result<Json<ApiResponse<CheckDigitResponse>>> {
    let response = state.card_service.check_digit(&query.partial)?;
    Ok(Json(ApiResponse::success(response)))
}

/// List registered card profiles.
pub async fn list_profiles(State(state): State<AppState>) -> Json<ApiResponse<ProfileListResponse>> {
    Json(ApiResponse::success(state.card_service.profiles()))
}
