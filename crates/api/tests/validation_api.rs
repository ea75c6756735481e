//! HTTP-level integration tests for the `/validation` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

async fn validate(field: &str, value: &str) -> (StatusCode, serde_json::Value) {
    let app = common::build_test_app(common::test_pool().await);
    let response = post_json(
        app,
        &format!("/api/v1/validation/{field}"),
        json!({ "value": value }),
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Single-field dry runs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_national_id() {
    let (status, json) = validate("national-id", "52998224725").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["valid"], true);
    assert_eq!(json["data"]["message"], "");
    assert!(json["data"].get("kind").is_none());
}

#[tokio::test]
async fn national_id_wrong_length_has_details() {
    let (_, json) = validate("national-id", "5299822472").await;

    let data = &json["data"];
    assert_eq!(data["valid"], false);
    assert_eq!(data["kind"], "idWrongLength");
    assert_eq!(data["details"]["actualLength"], 10);
    assert_eq!(data["details"]["expectedLength"], 11);
    assert_eq!(data["message"], "National ID must have 11 digits");
}

#[tokio::test]
async fn formatted_national_id_variant_accepts_punctuation() {
    let (_, strict) = validate("national-id", "529.982.247-25").await;
    let (_, lenient) = validate("national-id-formatted", "529.982.247-25").await;

    assert_eq!(strict["data"]["kind"], "nonNumericId");
    assert_eq!(lenient["data"]["valid"], true);
}

#[tokio::test]
async fn email_too_long() {
    let value = format!("{}@email.com", "a".repeat(255));
    let (_, json) = validate("email", &value).await;

    assert_eq!(json["data"]["kind"], "emailTooLong");
    assert_eq!(json["data"]["details"]["maxLength"], 254);
    assert_eq!(json["data"]["details"]["actualLength"], 265);
}

#[tokio::test]
async fn phone_leading_zero_reports_area_code() {
    let (_, json) = validate("phone", "01199999999").await;

    assert_eq!(json["data"]["kind"], "invalidAreaCode");
    assert_eq!(json["data"]["details"]["areaCode"], 1);
    assert_eq!(json["data"]["message"], "Invalid area code");
}

#[tokio::test]
async fn mobile_and_landline_lengths() {
    let (_, mobile) = validate("mobile", "1199999999").await;
    let (_, landline) = validate("landline", "1199999999").await;

    assert_eq!(mobile["data"]["kind"], "mobileWrongLength");
    assert_eq!(landline["data"]["valid"], true);
}

#[tokio::test]
async fn empty_value_is_valid() {
    for field in ["national-id", "email", "phone", "mobile", "landline"] {
        let (_, json) = validate(field, "").await;
        assert_eq!(json["data"]["valid"], true, "{field}");
    }
}

#[tokio::test]
async fn unknown_field_returns_400() {
    let (status, json) = validate("shoe-size", "42").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Uniqueness check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn registered_national_id_is_taken() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/api/v1/validation/national-id/unique?value=123.456.789-00").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["kind"], "idAlreadyExists");
    assert_eq!(json["data"]["details"]["value"], "123.456.789-00");
}

#[tokio::test]
async fn unregistered_national_id_is_free() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/api/v1/validation/national-id/unique?value=52998224725").await;

    assert_eq!(body_json(response).await["data"]["valid"], true);
}

#[tokio::test]
async fn uniqueness_check_runs_simple_pipeline_first() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/api/v1/validation/national-id/unique?value=123").await;

    assert_eq!(body_json(response).await["data"]["kind"], "idWrongLength");
}

#[tokio::test]
async fn uniqueness_check_with_store_down_returns_503() {
    let pool = common::test_pool().await;
    pool.close().await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/validation/national-id/unique?value=52998224725").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "LOOKUP_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn message_for_known_and_unknown_codes() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/api/v1/validation/messages/invalidIdDigits").await;
    assert_eq!(body_json(response).await["data"]["message"], "Invalid national ID");

    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/api/v1/validation/messages/whatever").await;
    assert_eq!(body_json(response).await["data"]["message"], "Invalid format");
}
