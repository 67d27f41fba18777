use falcon_db::passengers::models::Passenger;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListPassengersResponse {
    pub data: Vec<Passenger>,
    pub count: usize,
}
