use serde::Deserialize;

/// Body for both create and update. On update, absent fields keep their
/// stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRequest {
    pub passenger_name: Option<String>,
    pub nationality: Option<String>,
    pub gender: Option<String>,
    pub passport_number: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}
