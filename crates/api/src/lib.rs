//! HTTP service for the person registry: CRUD, national ID search and
//! field-level dry-run validation. `main.rs` and the integration tests both
//! build the app through [`router::build_app_router`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
