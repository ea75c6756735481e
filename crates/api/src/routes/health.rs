use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use cadastro_db::repositories::PersonRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the person store cannot be queried.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Registered persons; absent when the store is down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons: Option<i64>,
}

/// GET /health
///
/// Counting the registry doubles as the database probe.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let persons = match PersonRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the person store");
            None
        }
    };
    let db_healthy = persons.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        persons,
    })
}

/// Root-level routes, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
