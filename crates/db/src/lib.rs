pub mod bookings;
pub mod cancellations;
pub mod flights;
pub mod memory;
pub mod passengers;
pub mod stats;

use falcon_common::error::{FalconError, FalconResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a Postgres connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> FalconResult<PgPool> {
    tracing::info!("connecting to database");
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))
}

/// Apply the bundled SQL migrations.
pub async fn run_migrations(pool: &PgPool) -> FalconResult<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Connect to `TEST_DATABASE_URL` and migrate, or `None` when unset.
    pub async fn test_pool() -> Option<PgPool> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = create_pool(&url).await.expect("db should connect");
        run_migrations(&pool).await.expect("migrations should apply");
        Some(pool)
    }
}
