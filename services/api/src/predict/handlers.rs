use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use falcon_common::error::FalconError;
use falcon_risk::samples::sample_flights as demo_flights;
use falcon_risk::{FlightRiskInput, RiskAssessment};

use crate::error::ApiError;
use crate::predict::responses::{
    ApiHealthResponse, BatchPrediction, BatchPredictResponse, SampleFlightsResponse,
};
use crate::AppState;

/// Read a flight from arbitrary JSON. Anything that is not an object
/// scores as a flight with every field defaulted.
fn flight_from_value(value: serde_json::Value) -> FlightRiskInput {
    if !value.is_object() {
        tracing::debug!("flight payload is not an object; using defaults");
        return FlightRiskInput::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "unreadable flight payload; using defaults");
        FlightRiskInput::default()
    })
}

pub async fn predict_delay(State(state): State<AppState>, body: Bytes) -> Json<RiskAssessment> {
    let input = serde_json::from_slice::<serde_json::Value>(&body)
        .map(flight_from_value)
        .unwrap_or_default();
    Json(state.risk.assess(&input))
}

pub async fn batch_predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BatchPredictResponse>, ApiError> {
    let flights = match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(serde_json::Value::Array(items)) => items,
        _ => {
            return Err(ApiError(FalconError::Validation(
                "expected a list of flight objects".to_string(),
            )))
        }
    };

    let predictions: Vec<BatchPrediction> = flights
        .into_iter()
        .enumerate()
        .map(|(flight_index, value)| BatchPrediction {
            assessment: state.risk.assess(&flight_from_value(value)),
            flight_index,
        })
        .collect();

    tracing::info!(count = predictions.len(), "batch prediction");
    Ok(Json(BatchPredictResponse { predictions }))
}

pub async fn sample_flights() -> Json<SampleFlightsResponse> {
    let data = demo_flights(Utc::now());
    let count = data.len();
    Json(SampleFlightsResponse { data, count })
}

pub async fn api_health() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}
