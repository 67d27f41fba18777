use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use falcon_common::error::FalconError;
use falcon_db::flights::models::Flight;
use uuid::Uuid;

use crate::error::ApiError;
use crate::flights::requests::{CreateFlightRequest, UpdateFlightRequest};
use crate::flights::responses::ListFlightsResponse;
use crate::validation::{parse_date, positive_seats, required_date, required_text};
use crate::AppState;

pub async fn list_flights(
    State(state): State<AppState>,
) -> Result<Json<ListFlightsResponse>, ApiError> {
    let data = state.flights.list().await?;
    let count = data.len();
    Ok(Json(ListFlightsResponse { data, count }))
}

pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Flight>, ApiError> {
    let flight = state
        .flights
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError(FalconError::NotFound(format!("flight not found: {id}"))))?;
    Ok(Json(flight))
}

pub async fn create_flight(
    State(state): State<AppState>,
    Json(body): Json<CreateFlightRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let now = Utc::now();
    let flight = Flight {
        id: Uuid::new_v4(),
        flight_code: required_text(body.flight_code, "flightCode")?,
        source: required_text(body.source, "source")?,
        destination: required_text(body.destination, "destination")?,
        flight_date: required_date(body.flight_date, "flightDate")?,
        seats: positive_seats(body.seats.ok_or_else(|| FalconError::required("seats"))?)?,
        created_at: now,
        updated_at: now,
    };

    let created = state.flights.create(flight).await?;
    tracing::info!(id = %created.id, flight_code = %created.flight_code, "flight created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateFlightRequest>,
) -> Result<Json<Flight>, ApiError> {
    let existing = state
        .flights
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError(FalconError::NotFound(format!("flight not found: {id}"))))?;

    let flight_date = match body.flight_date {
        Some(raw) => parse_date(raw.trim(), "flightDate")?,
        None => existing.flight_date,
    };

    let flight = Flight {
        id,
        flight_code: required_text(
            Some(body.flight_code.unwrap_or(existing.flight_code)),
            "flightCode",
        )?,
        source: required_text(Some(body.source.unwrap_or(existing.source)), "source")?,
        destination: required_text(
            Some(body.destination.unwrap_or(existing.destination)),
            "destination",
        )?,
        flight_date,
        seats: positive_seats(body.seats.unwrap_or(existing.seats))?,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    let updated = state.flights.update(flight).await?;
    Ok(Json(updated))
}

pub async fn delete_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.flights.delete(id).await?;
    tracing::info!(%id, "flight deleted");
    Ok(StatusCode::NO_CONTENT)
}
