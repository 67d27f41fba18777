use serde::{Deserialize, Serialize};

use crate::scorer::RiskLevel;

/// Echo of the scored flight, as shown above the risk badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightInfo {
    pub airline: String,
    pub route: String,
    #[serde(alias = "departure_time")]
    pub departure_time: String,
    #[serde(default, alias = "day_of_week")]
    pub day_of_week: String,
    #[serde(default)]
    pub month: String,
}

/// Result of one delay risk evaluation.
///
/// The same shape is returned by the HTTP endpoint and by local simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    #[serde(alias = "delay_probability")]
    pub delay_probability: f64,
    #[serde(alias = "risk_score")]
    pub risk_score: u32,
    #[serde(alias = "risk_level")]
    pub risk_level: RiskLevel,
    #[serde(alias = "flight_info")]
    pub flight_info: FlightInfo,
    #[serde(default)]
    pub recommendations: Vec<String>,
}
