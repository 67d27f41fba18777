use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::bookings::models::Booking;
use crate::bookings::repositories::BookingRepository;
use falcon_common::error::{FalconError, FalconResult};

const BOOKING_COLUMNS: &str = "id, passenger_id, passenger_name, flight_code, gender, passport, \
     nationality, amount, created_at";

#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn list(&self) -> FalconResult<Vec<Booking>> {
        let rows = sqlx::query(&format!(
            "select {BOOKING_COLUMNS} from bookings order by created_at desc, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(rows.iter().map(map_booking_row).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> FalconResult<Option<Booking>> {
        let row = sqlx::query(&format!("select {BOOKING_COLUMNS} from bookings where id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(row.as_ref().map(map_booking_row))
    }

    async fn create(&self, booking: Booking) -> FalconResult<Booking> {
        let row = sqlx::query(&format!(
            "insert into bookings
             (id, passenger_id, passenger_name, flight_code, gender, passport, nationality,
              amount, created_at)
             values ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             returning {BOOKING_COLUMNS}"
        ))
        .bind(booking.id)
        .bind(booking.passenger_id)
        .bind(&booking.passenger_name)
        .bind(&booking.flight_code)
        .bind(&booking.gender)
        .bind(&booking.passport)
        .bind(&booking.nationality)
        .bind(booking.amount)
        .bind(booking.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(map_booking_row(&row))
    }
}

fn map_booking_row(row: &sqlx::postgres::PgRow) -> Booking {
    Booking {
        id: row.get("id"),
        passenger_id: row.get("passenger_id"),
        passenger_name: row.get("passenger_name"),
        flight_code: row.get("flight_code"),
        gender: row.get("gender"),
        passport: row.get("passport"),
        nationality: row.get("nationality"),
        amount: row.get("amount"),
        created_at: row.get("created_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;
    use chrono::Utc;

    async fn test_repo() -> Option<PgBookingRepository> {
        test_pool().await.map(PgBookingRepository::new)
    }

    fn make_booking() -> Booking {
        Booking {
            id: Uuid::new_v4(),
            passenger_id: Uuid::new_v4(),
            passenger_name: "Ada Lovelace".to_string(),
            flight_code: "AA100".to_string(),
            gender: Some("Female".to_string()),
            passport: None,
            nationality: Some("British".to_string()),
            amount: 420.5,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_and_get_booking() {
        let Some(repo) = test_repo().await else { return };

        let saved = repo.create(make_booking()).await.expect("create");
        let fetched = repo.get_by_id(saved.id).await.expect("get").expect("exists");
        assert_eq!(fetched.flight_code, "AA100");
        assert!((fetched.amount - 420.5).abs() < f64::EPSILON);
        assert!(fetched.passport.is_none());
    }

    #[tokio::test]
    async fn list_includes_new_booking() {
        let Some(repo) = test_repo().await else { return };

        let saved = repo.create(make_booking()).await.expect("create");
        let all = repo.list().await.expect("list");
        assert!(all.iter().any(|b| b.id == saved.id));
    }
}
