//! Handlers for the `/validation` resource.
//!
//! Dry-run validation for clients that check a field while the user is still
//! typing. Nothing here writes to the store.

use axum::extract::{Path, Query, State};
use axum::Json;
use cadastro_core::person;
use cadastro_core::validation::existence::check_unique as check_national_id_unique;
use cadastro_core::validation::messages::{message_for_code, message_for_outcome};
use cadastro_core::validation::outcome::{Details, FailureKind, ValidationOutcome};
use cadastro_core::validation::pipeline::Check;
use cadastro_core::validation::{email, national_id, phone};
use cadastro_db::lookup::PersonLookup;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /validation/{field}`.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub value: String,
}

/// Query parameters for the uniqueness check.
#[derive(Debug, Deserialize)]
pub struct UniqueQuery {
    #[serde(default)]
    pub value: String,
}

/// Outcome of a single-field validation as returned to clients.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub field: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
    /// Empty when valid.
    pub message: &'static str,
}

impl ValidationResponse {
    fn new(field: &str, outcome: ValidationOutcome) -> Self {
        let message = message_for_outcome(&outcome);
        let (kind, details) = match outcome.into_failure() {
            Some(failure) => (Some(failure.kind), Some(failure.details)),
            None => (None, None),
        };
        Self {
            field: field.to_string(),
            valid: kind.is_none(),
            kind,
            details,
            message,
        }
    }
}

/// Message lookup result.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub code: String,
    pub message: &'static str,
}

fn name_validation(raw: &str) -> ValidationOutcome {
    person::NAME.run(raw)
}

fn sex_validation(raw: &str) -> ValidationOutcome {
    person::SEX.run(raw)
}

/// Validation entry point for each field name accepted in the path.
fn check_for(field: &str) -> Option<Check> {
    let check: Check = match field {
        "national-id" => national_id::complete_validation,
        "national-id-formatted" => national_id::complete_formatted_validation,
        "national-id-simple" => national_id::simple_validation,
        "email" => email::form_validation,
        "phone" => phone::complete_validation,
        "mobile" => phone::mobile_check,
        "landline" => phone::landline_check,
        "name" => name_validation,
        "sex" => sex_validation,
        _ => return None,
    };
    Some(check)
}

/// POST /api/v1/validation/{field}
///
/// Run one field validator against `{ "value": ... }`. An empty value is
/// valid; presence is only enforced on registration.
pub async fn validate_field(
    Path(field): Path<String>,
    Json(input): Json<ValidateRequest>,
) -> AppResult<Json<DataResponse<ValidationResponse>>> {
    let check = check_for(&field)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown validation field: {field}")))?;

    let outcome = check(&input.value);
    Ok(Json(DataResponse::new(ValidationResponse::new(&field, outcome))))
}

/// GET /api/v1/validation/national-id/unique?value=
///
/// Simple national ID pipeline followed by a lookup in the store. Returns
/// 503 when the store cannot be queried.
pub async fn check_unique(
    State(state): State<AppState>,
    Query(params): Query<UniqueQuery>,
) -> AppResult<Json<DataResponse<ValidationResponse>>> {
    let lookup = PersonLookup::new(state.pool.clone());
    let outcome = check_national_id_unique(&lookup, &params.value).await?;
    Ok(Json(DataResponse::new(ValidationResponse::new("national-id", outcome))))
}

/// GET /api/v1/validation/messages/{code}
///
/// Unknown codes get the generic fallback message.
pub async fn message(Path(code): Path<String>) -> Json<DataResponse<MessageResponse>> {
    let message = message_for_code(&code);
    Json(DataResponse::new(MessageResponse { code, message }))
}
