use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cancellation {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub flight_code: String,
    pub cancellation_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
