pub mod handlers;
pub mod responses;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/predict-delay", post(handlers::predict_delay))
        .route("/api/predict", post(handlers::predict_delay))
        .route("/api/batch-predict", post(handlers::batch_predict))
        .route("/api/sample-flights", get(handlers::sample_flights))
        .route("/api/health", get(handlers::api_health))
}
