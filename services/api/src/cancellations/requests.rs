use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCancellationRequest {
    pub ticket_id: Option<String>,
    pub flight_code: Option<String>,
    pub cancellation_date: Option<String>,
}
