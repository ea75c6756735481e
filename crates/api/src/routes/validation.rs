//! Route definitions for the `/validation` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::validation;
use crate::state::AppState;

/// Routes mounted at `/validation`.
///
/// ```text
/// POST   /{field}              -> validate_field
/// GET    /national-id/unique   -> check_unique   (?value)
/// GET    /messages/{code}      -> message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{field}", post(validation::validate_field))
        .route("/national-id/unique", get(validation::check_unique))
        .route("/messages/{code}", get(validation::message))
}
