//! Repository for the `breeds` table.

use sqlx::PgPool;
use vetsoft_core::types::DbId;

use crate::models::breed::{Breed, CreateBreed};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for breeds.
pub struct BreedRepo;

impl BreedRepo {
    /// Insert a new breed, returning the created row.
    ///
    /// A duplicate name violates `uq_breeds_name`.
    pub async fn create(pool: &PgPool, input: &CreateBreed) -> Result<Breed, sqlx::Error> {
        let query = format!("INSERT INTO breeds (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Breed>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a breed by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Breed>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM breeds WHERE id = $1");
        sqlx::query_as::<_, Breed>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all breeds in insertion order (the order they were registered).
    pub async fn list(pool: &PgPool) -> Result<Vec<Breed>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM breeds ORDER BY id");
        sqlx::query_as::<_, Breed>(&query).fetch_all(pool).await
    }

    /// Whether a breed with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM breeds WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Delete a breed by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM breeds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
