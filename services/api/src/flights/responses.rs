use falcon_db::flights::models::Flight;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListFlightsResponse {
    pub data: Vec<Flight>,
    pub count: usize,
}
