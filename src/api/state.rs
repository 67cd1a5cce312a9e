use sqlx::SqlitePool;

/// Shared application state
///
/// Handlers only need the recommendation store pool; there is no mutable
/// cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
