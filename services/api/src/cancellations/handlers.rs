use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use falcon_db::cancellations::models::Cancellation;
use uuid::Uuid;

use crate::cancellations::requests::CreateCancellationRequest;
use crate::cancellations::responses::ListCancellationsResponse;
use crate::error::ApiError;
use crate::validation::{optional_text, required_date, required_text, required_uuid};
use crate::AppState;

pub async fn list_cancellations(
    State(state): State<AppState>,
) -> Result<Json<ListCancellationsResponse>, ApiError> {
    let data = state.cancellations.list().await?;
    let count = data.len();
    Ok(Json(ListCancellationsResponse { data, count }))
}

/// Cancel a ticket. The flight code defaults to the booking's when omitted;
/// the booking itself is removed with the same write.
pub async fn create_cancellation(
    State(state): State<AppState>,
    Json(body): Json<CreateCancellationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let ticket_id = required_uuid(body.ticket_id, "ticketId")?;
    let cancellation_date = required_date(body.cancellation_date, "cancellationDate")?;

    let flight_code = match optional_text(body.flight_code) {
        Some(code) => Some(code),
        None => state
            .bookings
            .get_by_id(ticket_id)
            .await?
            .map(|b| b.flight_code),
    };

    let cancellation = Cancellation {
        id: Uuid::new_v4(),
        ticket_id,
        flight_code: required_text(flight_code, "flightCode")?,
        cancellation_date,
        created_at: Utc::now(),
    };

    let created = state.cancellations.create(cancellation).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
