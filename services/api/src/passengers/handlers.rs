use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use falcon_common::error::{FalconError, FalconResult};
use falcon_db::passengers::models::Passenger;
use uuid::Uuid;

use crate::error::ApiError;
use crate::passengers::requests::PassengerRequest;
use crate::passengers::responses::ListPassengersResponse;
use crate::validation::required_text;
use crate::AppState;

fn build_passenger(
    id: Uuid,
    body: PassengerRequest,
    created_at: DateTime<Utc>,
) -> FalconResult<Passenger> {
    Ok(Passenger {
        id,
        passenger_name: required_text(body.passenger_name, "passengerName")?,
        nationality: required_text(body.nationality, "nationality")?,
        gender: required_text(body.gender, "gender")?,
        passport_number: required_text(body.passport_number, "passportNumber")?,
        phone_number: required_text(body.phone_number, "phoneNumber")?,
        address: required_text(body.address, "address")?,
        created_at,
        updated_at: Utc::now(),
    })
}

pub async fn list_passengers(
    State(state): State<AppState>,
) -> Result<Json<ListPassengersResponse>, ApiError> {
    let data = state.passengers.list().await?;
    let count = data.len();
    Ok(Json(ListPassengersResponse { data, count }))
}

pub async fn get_passenger(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Passenger>, ApiError> {
    let passenger = state.passengers.get_by_id(id).await?.ok_or_else(|| {
        ApiError(FalconError::NotFound(format!("passenger not found: {id}")))
    })?;
    Ok(Json(passenger))
}

pub async fn create_passenger(
    State(state): State<AppState>,
    Json(body): Json<PassengerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let passenger = build_passenger(Uuid::new_v4(), body, Utc::now())?;
    let created = state.passengers.create(passenger).await?;
    tracing::info!(id = %created.id, "passenger created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_passenger(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PassengerRequest>,
) -> Result<Json<Passenger>, ApiError> {
    let existing = state.passengers.get_by_id(id).await?.ok_or_else(|| {
        ApiError(FalconError::NotFound(format!("passenger not found: {id}")))
    })?;

    let merged = PassengerRequest {
        passenger_name: body.passenger_name.or(Some(existing.passenger_name)),
        nationality: body.nationality.or(Some(existing.nationality)),
        gender: body.gender.or(Some(existing.gender)),
        passport_number: body.passport_number.or(Some(existing.passport_number)),
        phone_number: body.phone_number.or(Some(existing.phone_number)),
        address: body.address.or(Some(existing.address)),
    };

    let passenger = build_passenger(id, merged, existing.created_at)?;
    let updated = state.passengers.update(passenger).await?;
    Ok(Json(updated))
}

pub async fn delete_passenger(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.passengers.delete(id).await?;
    tracing::info!(%id, "passenger deleted");
    Ok(StatusCode::NO_CONTENT)
}
