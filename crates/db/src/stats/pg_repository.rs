use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::stats::models::DashboardStats;
use crate::stats::repositories::StatsRepository;
use falcon_common::error::{FalconError, FalconResult};

#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn counts(&self) -> FalconResult<DashboardStats> {
        let row = sqlx::query(
            "select
               (select count(*) from flights) as total_flights,
               (select count(*) from passengers) as total_passengers,
               (select count(*) from bookings) as total_bookings,
               (select count(*) from cancellations) as total_cancellations",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(DashboardStats {
            total_flights: row.get("total_flights"),
            total_passengers: row.get("total_passengers"),
            total_bookings: row.get("total_bookings"),
            total_cancellations: row.get("total_cancellations"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;

    #[tokio::test]
    async fn counts_are_non_negative() {
        let Some(pool) = test_pool().await else { return };
        let stats = PgStatsRepository::new(pool).counts().await.expect("counts");
        assert!(stats.total_flights >= 0);
        assert!(stats.total_cancellations >= 0);
    }
}
