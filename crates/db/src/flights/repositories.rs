use async_trait::async_trait;
use uuid::Uuid;

use crate::flights::models::Flight;
use falcon_common::error::FalconResult;

#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> FalconResult<Vec<Flight>>;
    async fn get_by_id(&self, id: Uuid) -> FalconResult<Option<Flight>>;
    async fn create(&self, flight: Flight) -> FalconResult<Flight>;
    /// Replace the stored row; `NotFound` when the id is unknown.
    async fn update(&self, flight: Flight) -> FalconResult<Flight>;
    async fn delete(&self, id: Uuid) -> FalconResult<()>;
}
