use sqlx::PgPool;

use crate::auth::TokenService;

/// Shared handles injected into every handler and middleware
#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(pool: PgPool, tokens: TokenService) -> Self {
        Self { pool, tokens }
    }
}
