use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub passenger_id: Option<String>,
    pub passenger_name: Option<String>,
    pub flight_code: Option<String>,
    pub gender: Option<String>,
    pub passport: Option<String>,
    pub nationality: Option<String>,
    pub amount: Option<f64>,
}
