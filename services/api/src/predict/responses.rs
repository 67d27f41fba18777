use chrono::{DateTime, Utc};
use falcon_risk::{FlightRiskInput, RiskAssessment};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPrediction {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub flight_index: usize,
}

#[derive(Debug, Serialize)]
pub struct BatchPredictResponse {
    pub predictions: Vec<BatchPrediction>,
}

#[derive(Debug, Serialize)]
pub struct SampleFlightsResponse {
    pub data: Vec<FlightRiskInput>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}
