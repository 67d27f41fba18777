use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ticket. `id` doubles as the ticket id quoted on cancellations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub passenger_id: Uuid,
    pub passenger_name: String,
    pub flight_code: String,
    pub gender: Option<String>,
    pub passport: Option<String>,
    pub nationality: Option<String>,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}
