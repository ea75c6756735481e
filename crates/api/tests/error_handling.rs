//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use cadastro_api::error::AppError;
use cadastro_core::error::CoreError;
use cadastro_core::person::{validate_new_person, PersonForm};
use cadastro_core::validation::existence::LookupError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Person",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Person with id 42 not found");
}

#[tokio::test]
async fn not_found_by_key_returns_404() {
    let err = AppError::Core(CoreError::NotFoundByKey {
        entity: "Person",
        key: "national ID",
        value: "52998224725".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Person with national ID 52998224725 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::InvalidFields maps to 400 with a per-field map
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_fields_list_every_failing_field() {
    let form = PersonForm {
        name: "Ana Costa".into(),
        national_id: "11111111111".into(),
        sex: "F".into(),
        email: String::new(),
        phone: "01199999999".into(),
    };
    let err = AppError::Core(CoreError::InvalidFields(validate_new_person(&form)));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let fields = json["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["nationalId"]["kind"], "idAllSameDigits");
    assert_eq!(fields["email"]["kind"], "required");
    assert_eq!(fields["email"]["message"], "This field is required");
    assert_eq!(fields["phone"]["kind"], "invalidAreaCode");
    assert_eq!(fields["phone"]["details"]["areaCode"], 1);
    assert!(fields.get("name").is_none());
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 without a field map
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::from(CoreError::Validation(
        "National ID must have 11 digits".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "National ID must have 11 digits");
    assert!(json.get("fields").is_none());
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Conflict maps to 409 with CONFLICT code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate national ID".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "duplicate national ID");
}

// ---------------------------------------------------------------------------
// Test: lookup failures map to 503, not to a field error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lookup_unavailable_returns_503() {
    let err = AppError::from(LookupError::Unavailable("pool closed".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "LOOKUP_UNAVAILABLE");
    assert!(json.get("fields").is_none());
}

// ---------------------------------------------------------------------------
// Test: internal errors do not leak details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_is_sanitized() {
    let err = AppError::Database(sqlx::Error::PoolClosed);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}
