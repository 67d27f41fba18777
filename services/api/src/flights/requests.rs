use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightRequest {
    pub flight_code: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub flight_date: Option<String>,
    pub seats: Option<i32>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightRequest {
    pub flight_code: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub flight_date: Option<String>,
    pub seats: Option<i32>,
}
