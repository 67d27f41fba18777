use falcon_db::bookings::models::Booking;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListBookingsResponse {
    pub data: Vec<Booking>,
    pub count: usize,
}
