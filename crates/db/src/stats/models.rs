use serde::{Deserialize, Serialize};

/// Row counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_flights: i64,
    pub total_passengers: i64,
    pub total_bookings: i64,
    pub total_cancellations: i64,
}
