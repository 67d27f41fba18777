use async_trait::async_trait;
use uuid::Uuid;

use crate::passengers::models::Passenger;
use falcon_common::error::FalconResult;

#[async_trait]
pub trait PassengerRepository: Send + Sync {
    async fn list(&self) -> FalconResult<Vec<Passenger>>;
    async fn get_by_id(&self, id: Uuid) -> FalconResult<Option<Passenger>>;
    async fn create(&self, passenger: Passenger) -> FalconResult<Passenger>;
    async fn update(&self, passenger: Passenger) -> FalconResult<Passenger>;
    async fn delete(&self, id: Uuid) -> FalconResult<()>;
}
