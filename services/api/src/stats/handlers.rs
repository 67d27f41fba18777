use axum::extract::State;
use axum::Json;
use falcon_db::stats::models::DashboardStats;

use crate::error::ApiError;
use crate::AppState;

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    Ok(Json(state.stats.counts().await?))
}
