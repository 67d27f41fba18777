use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::flights::models::Flight;
use crate::flights::repositories::FlightRepository;
use falcon_common::error::{FalconError, FalconResult};

const FLIGHT_COLUMNS: &str =
    "id, flight_code, source, destination, flight_date, seats, created_at, updated_at";

#[derive(Clone)]
pub struct PgFlightRepository {
    pool: PgPool,
}

impl PgFlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightRepository for PgFlightRepository {
    async fn list(&self) -> FalconResult<Vec<Flight>> {
        let rows = sqlx::query(&format!(
            "select {FLIGHT_COLUMNS} from flights order by created_at desc, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(rows.iter().map(map_flight_row).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> FalconResult<Option<Flight>> {
        let row = sqlx::query(&format!("select {FLIGHT_COLUMNS} from flights where id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(row.as_ref().map(map_flight_row))
    }

    async fn create(&self, flight: Flight) -> FalconResult<Flight> {
        let row = sqlx::query(&format!(
            "insert into flights
             (id, flight_code, source, destination, flight_date, seats, created_at, updated_at)
             values ($1, $2, $3, $4, $5, $6, $7, $8)
             returning {FLIGHT_COLUMNS}"
        ))
        .bind(flight.id)
        .bind(&flight.flight_code)
        .bind(&flight.source)
        .bind(&flight.destination)
        .bind(flight.flight_date)
        .bind(flight.seats)
        .bind(flight.created_at)
        .bind(flight.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(map_flight_row(&row))
    }

    async fn update(&self, flight: Flight) -> FalconResult<Flight> {
        let row = sqlx::query(&format!(
            "update flights
             set flight_code = $2, source = $3, destination = $4, flight_date = $5,
                 seats = $6, updated_at = $7
             where id = $1
             returning {FLIGHT_COLUMNS}"
        ))
        .bind(flight.id)
        .bind(&flight.flight_code)
        .bind(&flight.source)
        .bind(&flight.destination)
        .bind(flight.flight_date)
        .bind(flight.seats)
        .bind(flight.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        row.as_ref()
            .map(map_flight_row)
            .ok_or_else(|| FalconError::NotFound(format!("flight not found: {}", flight.id)))
    }

    async fn delete(&self, id: Uuid) -> FalconResult<()> {
        let result = sqlx::query("delete from flights where id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| FalconError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(FalconError::NotFound(format!("flight not found: {id}")));
        }
        Ok(())
    }
}

fn map_flight_row(row: &sqlx::postgres::PgRow) -> Flight {
    Flight {
        id: row.get("id"),
        flight_code: row.get("flight_code"),
        source: row.get("source"),
        destination: row.get("destination"),
        flight_date: row.get("flight_date"),
        seats: row.get("seats"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;
    use chrono::{NaiveDate, Utc};

    async fn test_repo() -> Option<PgFlightRepository> {
        test_pool().await.map(PgFlightRepository::new)
    }

    fn make_flight(code: &str) -> Flight {
        let now = Utc::now();
        Flight {
            id: Uuid::new_v4(),
            flight_code: code.to_string(),
            source: "JFK".to_string(),
            destination: "LAX".to_string(),
            flight_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            seats: 180,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_and_get_flight() {
        let Some(repo) = test_repo().await else { return };

        let saved = repo.create(make_flight("AA100")).await.expect("create");
        assert_eq!(saved.flight_code, "AA100");

        let fetched = repo.get_by_id(saved.id).await.expect("get").expect("exists");
        assert_eq!(fetched.seats, 180);
        assert_eq!(fetched.destination, "LAX");
    }

    #[tokio::test]
    async fn update_changes_fields() {
        let Some(repo) = test_repo().await else { return };

        let mut flight = repo.create(make_flight("DL200")).await.expect("create");
        flight.seats = 90;
        flight.destination = "ORD".to_string();

        let updated = repo.update(flight.clone()).await.expect("update");
        assert_eq!(updated.seats, 90);
        assert_eq!(updated.destination, "ORD");
    }

    #[tokio::test]
    async fn update_unknown_flight_is_not_found() {
        let Some(repo) = test_repo().await else { return };

        let result = repo.update(make_flight("XX1")).await;
        assert!(matches!(result, Err(FalconError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_flight() {
        let Some(repo) = test_repo().await else { return };

        let saved = repo.create(make_flight("UA300")).await.expect("create");
        repo.delete(saved.id).await.expect("delete");
        assert!(repo.get_by_id(saved.id).await.expect("get").is_none());

        let again = repo.delete(saved.id).await;
        assert!(matches!(again, Err(FalconError::NotFound(_))));
    }
}
