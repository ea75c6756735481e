//! Request handlers.
//!
//! Handlers validate input with `cadastro_core`, delegate storage to the
//! repositories in `cadastro_db`, and map errors via [`crate::error::AppError`].

pub mod persons;
pub mod validation;
