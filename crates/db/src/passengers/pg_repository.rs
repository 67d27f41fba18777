use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::passengers::models::Passenger;
use crate::passengers::repositories::PassengerRepository;
use falcon_common::error::{FalconError, FalconResult};

const PASSENGER_COLUMNS: &str = "id, passenger_name, nationality, gender, passport_number, \
     phone_number, address, created_at, updated_at";

#[derive(Clone)]
pub struct PgPassengerRepository {
    pool: PgPool,
}

impl PgPassengerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassengerRepository for PgPassengerRepository {
    async fn list(&self) -> FalconResult<Vec<Passenger>> {
        let rows = sqlx::query(&format!(
            "select {PASSENGER_COLUMNS} from passengers order by created_at desc, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(rows.iter().map(map_passenger_row).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> FalconResult<Option<Passenger>> {
        let row = sqlx::query(&format!(
            "select {PASSENGER_COLUMNS} from passengers where id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(row.as_ref().map(map_passenger_row))
    }

    async fn create(&self, passenger: Passenger) -> FalconResult<Passenger> {
        let row = sqlx::query(&format!(
            "insert into passengers
             (id, passenger_name, nationality, gender, passport_number, phone_number, address,
              created_at, updated_at)
             values ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             returning {PASSENGER_COLUMNS}"
        ))
        .bind(passenger.id)
        .bind(&passenger.passenger_name)
        .bind(&passenger.nationality)
        .bind(&passenger.gender)
        .bind(&passenger.passport_number)
        .bind(&passenger.phone_number)
        .bind(&passenger.address)
        .bind(passenger.created_at)
        .bind(passenger.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        Ok(map_passenger_row(&row))
    }

    async fn update(&self, passenger: Passenger) -> FalconResult<Passenger> {
        let row = sqlx::query(&format!(
            "update passengers
             set passenger_name = $2, nationality = $3, gender = $4, passport_number = $5,
                 phone_number = $6, address = $7, updated_at = $8
             where id = $1
             returning {PASSENGER_COLUMNS}"
        ))
        .bind(passenger.id)
        .bind(&passenger.passenger_name)
        .bind(&passenger.nationality)
        .bind(&passenger.gender)
        .bind(&passenger.passport_number)
        .bind(&passenger.phone_number)
        .bind(&passenger.address)
        .bind(passenger.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| FalconError::Database(e.to_string()))?;

        row.as_ref().map(map_passenger_row).ok_or_else(|| {
            FalconError::NotFound(format!("passenger not found: {}", passenger.id))
        })
    }

    async fn delete(&self, id: Uuid) -> FalconResult<()> {
        let result = sqlx::query("delete from passengers where id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| FalconError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(FalconError::NotFound(format!("passenger not found: {id}")));
        }
        Ok(())
    }
}

fn map_passenger_row(row: &sqlx::postgres::PgRow) -> Passenger {
    Passenger {
        id: row.get("id"),
        passenger_name: row.get("passenger_name"),
        nationality: row.get("nationality"),
        gender: row.get("gender"),
        passport_number: row.get("passport_number"),
        phone_number: row.get("phone_number"),
        address: row.get("address"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
