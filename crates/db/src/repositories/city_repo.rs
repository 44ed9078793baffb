//! Repository for the `cities` table.

use sqlx::PgPool;
use vetsoft_core::types::DbId;

use crate::models::city::{City, CreateCity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city, returning the created row.
    ///
    /// A duplicate name violates `uq_cities_name`.
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let query = format!("INSERT INTO cities (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, City>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a city by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cities in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities ORDER BY id");
        sqlx::query_as::<_, City>(&query).fetch_all(pool).await
    }

    /// Whether a city with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM cities WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Delete a city by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
