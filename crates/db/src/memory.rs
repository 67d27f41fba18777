//! In-process store backing every repository trait.
//!
//! Used when `STORE=memory` and by the API tests. Rows are kept in insertion
//! order and listed newest first, matching the Postgres ordering.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::bookings::models::Booking;
use crate::bookings::repositories::BookingRepository;
use crate::cancellations::models::Cancellation;
use crate::cancellations::repositories::CancellationRepository;
use crate::flights::models::Flight;
use crate::flights::repositories::FlightRepository;
use crate::passengers::models::Passenger;
use crate::passengers::repositories::PassengerRepository;
use crate::stats::models::DashboardStats;
use crate::stats::repositories::StatsRepository;
use falcon_common::error::{FalconError, FalconResult};

#[derive(Default)]
struct Tables {
    flights: Vec<Flight>,
    passengers: Vec<Passenger>,
    bookings: Vec<Booking>,
    cancellations: Vec<Cancellation>,
}

/// Cloning shares the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T: Clone>(rows: &[T]) -> Vec<T> {
    rows.iter().rev().cloned().collect()
}

fn duplicate(kind: &str, id: Uuid) -> FalconError {
    FalconError::Database(format!("duplicate {kind} id: {id}"))
}

#[async_trait]
impl FlightRepository for MemoryStore {
    async fn list(&self) -> FalconResult<Vec<Flight>> {
        Ok(newest_first(&self.tables.read().await.flights))
    }

    async fn get_by_id(&self, id: Uuid) -> FalconResult<Option<Flight>> {
        let tables = self.tables.read().await;
        Ok(tables.flights.iter().find(|f| f.id == id).cloned())
    }

    async fn create(&self, flight: Flight) -> FalconResult<Flight> {
        let mut tables = self.tables.write().await;
        if tables.flights.iter().any(|f| f.id == flight.id) {
            return Err(duplicate("flight", flight.id));
        }
        tables.flights.push(flight.clone());
        Ok(flight)
    }

    async fn update(&self, flight: Flight) -> FalconResult<Flight> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .flights
            .iter_mut()
            .find(|f| f.id == flight.id)
            .ok_or_else(|| FalconError::NotFound(format!("flight not found: {}", flight.id)))?;
        // created_at is immutable, as in the SQL update
        let created_at = slot.created_at;
        *slot = Flight { created_at, ..flight };
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> FalconResult<()> {
        let mut tables = self.tables.write().await;
        let before = tables.flights.len();
        tables.flights.retain(|f| f.id != id);
        if tables.flights.len() == before {
            return Err(FalconError::NotFound(format!("flight not found: {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl PassengerRepository for MemoryStore {
    async fn list(&self) -> FalconResult<Vec<Passenger>> {
        Ok(newest_first(&self.tables.read().await.passengers))
    }

    async fn get_by_id(&self, id: Uuid) -> FalconResult<Option<Passenger>> {
        let tables = self.tables.read().await;
        Ok(tables.passengers.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, passenger: Passenger) -> FalconResult<Passenger> {
        let mut tables = self.tables.write().await;
        if tables.passengers.iter().any(|p| p.id == passenger.id) {
            return Err(duplicate("passenger", passenger.id));
        }
        tables.passengers.push(passenger.clone());
        Ok(passenger)
    }

    async fn update(&self, passenger: Passenger) -> FalconResult<Passenger> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .passengers
            .iter_mut()
            .find(|p| p.id == passenger.id)
            .ok_or_else(|| {
                FalconError::NotFound(format!("passenger not found: {}", passenger.id))
            })?;
        let created_at = slot.created_at;
        *slot = Passenger {
            created_at,
            ..passenger
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> FalconResult<()> {
        let mut tables = self.tables.write().await;
        let before = tables.passengers.len();
        tables.passengers.retain(|p| p.id != id);
        if tables.passengers.len() == before {
            return Err(FalconError::NotFound(format!("passenger not found: {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn list(&self) -> FalconResult<Vec<Booking>> {
        Ok(newest_first(&self.tables.read().await.bookings))
    }

    async fn get_by_id(&self, id: Uuid) -> FalconResult<Option<Booking>> {
        let tables = self.tables.read().await;
        Ok(tables.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, booking: Booking) -> FalconResult<Booking> {
        let mut tables = self.tables.write().await;
        if tables.bookings.iter().any(|b| b.id == booking.id) {
            return Err(duplicate("booking", booking.id));
        }
        tables.bookings.push(booking.clone());
        Ok(booking)
    }
}

#[async_trait]
impl CancellationRepository for MemoryStore {
    async fn list(&self) -> FalconResult<Vec<Cancellation>> {
        Ok(newest_first(&self.tables.read().await.cancellations))
    }

    async fn create(&self, cancellation: Cancellation) -> FalconResult<Cancellation> {
        // one write guard covers both tables
        let mut tables = self.tables.write().await;
        if tables.cancellations.iter().any(|c| c.id == cancellation.id) {
            return Err(duplicate("cancellation", cancellation.id));
        }
        let before = tables.bookings.len();
        tables.bookings.retain(|b| b.id != cancellation.ticket_id);
        let removed = before - tables.bookings.len();
        tables.cancellations.push(cancellation.clone());

        tracing::info!(
            ticket_id = %cancellation.ticket_id,
            bookings_removed = removed,
            "cancellation recorded"
        );
        Ok(cancellation)
    }
}

#[async_trait]
impl StatsRepository for MemoryStore {
    async fn counts(&self) -> FalconResult<DashboardStats> {
        let tables = self.tables.read().await;
        Ok(DashboardStats {
            total_flights: tables.flights.len() as i64,
            total_passengers: tables.passengers.len() as i64,
            total_bookings: tables.bookings.len() as i64,
            total_cancellations: tables.cancellations.len() as i64,
        })
    }
}
