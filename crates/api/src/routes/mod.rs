pub mod health;
pub mod persons;
pub mod validation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /persons                                 list, create
/// /persons/{id}                            get, update, delete
/// /persons/by-national-id/{national_id}    search by national ID
///
/// /validation/{field}                      dry-run one field (POST)
/// /validation/national-id/unique           uniqueness check (GET ?value=)
/// /validation/messages/{code}              message for a failure code
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/persons", persons::router())
        .nest("/validation", validation::router())
}
