use falcon_db::cancellations::models::Cancellation;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListCancellationsResponse {
    pub data: Vec<Cancellation>,
    pub count: usize,
}
