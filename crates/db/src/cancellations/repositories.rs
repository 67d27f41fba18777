use async_trait::async_trait;

use crate::cancellations::models::Cancellation;
use falcon_common::error::FalconResult;

#[async_trait]
pub trait CancellationRepository: Send + Sync {
    async fn list(&self) -> FalconResult<Vec<Cancellation>>;

    /// Record the cancellation and drop the booking it names, atomically.
    /// A ticket with no stored booking is still recorded.
    async fn create(&self, cancellation: Cancellation) -> FalconResult<Cancellation>;
}
