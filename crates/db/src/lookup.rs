//! Database-backed [`NationalIdLookup`].

use async_trait::async_trait;
use cadastro_core::validation::existence::{LookupError, NationalIdLookup};

use crate::repositories::PersonRepo;
use crate::DbPool;

/// Answers uniqueness checks from the `persons` table.
#[derive(Clone)]
pub struct PersonLookup {
    pool: DbPool,
}

impl PersonLookup {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NationalIdLookup for PersonLookup {
    async fn exists(&self, national_id: &str) -> Result<bool, LookupError> {
        PersonRepo::exists_by_national_id(&self.pool, national_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "National ID lookup failed");
                LookupError::Unavailable(e.to_string())
            })
    }
}
