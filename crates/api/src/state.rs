use cadastro_db::DbPool;

/// Handler state. Cloned per request; the pool is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
