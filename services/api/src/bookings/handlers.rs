use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use falcon_common::error::FalconError;
use falcon_db::bookings::models::Booking;
use uuid::Uuid;

use crate::bookings::requests::CreateBookingRequest;
use crate::bookings::responses::ListBookingsResponse;
use crate::error::ApiError;
use crate::validation::{optional_text, positive_amount, required_text, required_uuid};
use crate::AppState;

pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<ListBookingsResponse>, ApiError> {
    let data = state.bookings.list().await?;
    let count = data.len();
    Ok(Json(ListBookingsResponse { data, count }))
}

pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    let booking = state
        .bookings
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError(FalconError::NotFound(format!("booking not found: {id}"))))?;
    Ok(Json(booking))
}

/// Issue a ticket. Passenger details left out of the request are copied from
/// the stored passenger when one exists.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let passenger_id = required_uuid(body.passenger_id, "passengerId")?;
    let flight_code = required_text(body.flight_code, "flightCode")?;
    let amount = positive_amount(body.amount.ok_or_else(|| FalconError::required("amount"))?)?;

    let passenger = state.passengers.get_by_id(passenger_id).await?;
    if passenger.is_none() {
        tracing::debug!(%passenger_id, "booking for unknown passenger; no autofill");
    }

    let mut passenger_name = optional_text(body.passenger_name);
    let mut gender = optional_text(body.gender);
    let mut passport = optional_text(body.passport);
    let mut nationality = optional_text(body.nationality);
    if let Some(p) = passenger {
        passenger_name.get_or_insert(p.passenger_name);
        gender.get_or_insert(p.gender);
        passport.get_or_insert(p.passport_number);
        nationality.get_or_insert(p.nationality);
    }

    let booking = Booking {
        id: Uuid::new_v4(),
        passenger_id,
        passenger_name: required_text(passenger_name, "passengerName")?,
        flight_code,
        gender,
        passport,
        nationality,
        amount,
        created_at: Utc::now(),
    };

    let created = state.bookings.create(booking).await?;
    tracing::info!(ticket_id = %created.id, flight_code = %created.flight_code, "booking created");
    Ok((StatusCode::CREATED, Json(created)))
}
