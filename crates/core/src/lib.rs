//! Domain core for the person registry.
//!
//! Pure logic only: field validators, the person form model and the
//! uniqueness check seam. No database or HTTP dependencies.

pub mod error;
pub mod person;
pub mod types;
pub mod validation;
