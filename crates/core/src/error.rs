use crate::person::FormReport;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} with {key} {value}")]
    NotFoundByKey {
        entity: &'static str,
        key: &'static str,
        value: String,
    },

    /// Malformed input outside the person form, e.g. a search key.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// One or more form fields failed their validation pipeline.
    #[error("Validation failed for {} field(s)", .0.failures().count())]
    InvalidFields(FormReport),

    #[error("Conflict: {0}")]
    Conflict(String),
}
