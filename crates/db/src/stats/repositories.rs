use async_trait::async_trait;

use crate::stats::models::DashboardStats;
use falcon_common::error::FalconResult;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn counts(&self) -> FalconResult<DashboardStats>;
}
