use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::cancellations::models::Cancellation;
use crate::cancellations::repositories::CancellationRepository;
use falcon_common::error::{FalconError, FalconResult};

#[derive(Clone)]
pub struct PgCancellationRepository {
    pool: PgPool,
}

impl PgCancellationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CancellationRepository for PgCancellationRepository {
    async fn list(&self) -> FalconResult<Vec<Cancellation>> {
        let rows = sqlx::query(
            "select id, ticket_id, flight_code, cancellation_date, created_at
             from cancellations
             order by created_at desc, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(rows.iter().map(map_cancellation_row).collect())
    }

    async fn create(&self, cancellation: Cancellation) -> FalconResult<Cancellation> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| FalconError::Database(e.to_string()))?;

        let row = sqlx::query(
            "insert into cancellations (id, ticket_id, flight_code, cancellation_date, created_at)
             values ($1, $2, $3, $4, $5)
             returning id, ticket_id, flight_code, cancellation_date, created_at",
        )
        .bind(cancellation.id)
        .bind(cancellation.ticket_id)
        .bind(&cancellation.flight_code)
        .bind(cancellation.cancellation_date)
        .bind(cancellation.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        let removed = sqlx::query("delete from bookings where id = $1")
            .bind(cancellation.ticket_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| FalconError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| FalconError::Database(e.to_string()))?;

        tracing::info!(
            ticket_id = %cancellation.ticket_id,
            bookings_removed = removed.rows_affected(),
            "cancellation recorded"
        );

        Ok(map_cancellation_row(&row))
    }
}

fn map_cancellation_row(row: &sqlx::postgres::PgRow) -> Cancellation {
    Cancellation {
        id: row.get("id"),
        ticket_id: row.get("ticket_id"),
        flight_code: row.get("flight_code"),
        cancellation_date: row.get("cancellation_date"),
        created_at: row.get("created_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::models::Booking;
    use crate::bookings::pg_repository::PgBookingRepository;
    use crate::bookings::repositories::BookingRepository;
    use crate::test_support::test_pool;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn cancellation_removes_booking() {
        let Some(pool) = test_pool().await else { return };
        let bookings = PgBookingRepository::new(pool.clone());
        let repo = PgCancellationRepository::new(pool);

        let booking = bookings
            .create(Booking {
                id: Uuid::new_v4(),
                passenger_id: Uuid::new_v4(),
                passenger_name: "Alan Turing".to_string(),
                flight_code: "UA300".to_string(),
                gender: None,
                passport: None,
                nationality: None,
                amount: 99.0,
                created_at: Utc::now(),
            })
            .await
            .expect("create booking");

        let saved = repo
            .create(Cancellation {
                id: Uuid::new_v4(),
                ticket_id: booking.id,
                flight_code: booking.flight_code.clone(),
                cancellation_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                created_at: Utc::now(),
            })
            .await
            .expect("create cancellation");

        assert_eq!(saved.ticket_id, booking.id);
        assert!(bookings.get_by_id(booking.id).await.expect("get").is_none());

        let all = repo.list().await.expect("list");
        assert!(all.iter().any(|c| c.id == saved.id));
    }
}
