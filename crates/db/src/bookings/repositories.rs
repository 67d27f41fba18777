use async_trait::async_trait;
use uuid::Uuid;

use crate::bookings::models::Booking;
use falcon_common::error::FalconResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list(&self) -> FalconResult<Vec<Booking>>;
    async fn get_by_id(&self, id: Uuid) -> FalconResult<Option<Booking>>;
    async fn create(&self, booking: Booking) -> FalconResult<Booking>;
}
