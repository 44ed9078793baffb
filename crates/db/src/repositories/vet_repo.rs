//! Repository for the `vets` table.

use sqlx::PgPool;
use vetsoft_core::types::DbId;
use vetsoft_core::vet::{VetFields, VetForm};

use crate::error::SaveError;
use crate::models::vet::Vet;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, email, created_at, updated_at";

/// Provides CRUD and validated writes for vets.
pub struct VetRepo;

impl VetRepo {
    /// Insert an already-validated vet, returning the created row.
    pub async fn create(pool: &PgPool, input: &VetFields) -> Result<Vet, sqlx::Error> {
        let query = format!(
            "INSERT INTO vets (name, phone, email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vet>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a vet by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vets WHERE id = $1");
        sqlx::query_as::<_, Vet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Vet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vets ORDER BY id");
        sqlx::query_as::<_, Vet>(&query).fetch_all(pool).await
    }

    /// Overwrite a vet with already-validated values. `None` if missing.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VetFields,
    ) -> Result<Option<Vet>, sqlx::Error> {
        let query = format!(
            "UPDATE vets SET name = $2, phone = $3, email = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vet by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Validated writes
    // -----------------------------------------------------------------------

    pub async fn save(pool: &PgPool, form: &VetForm) -> Result<Vet, SaveError> {
        let fields = form.check().inspect_err(|errors| {
            tracing::debug!(%errors, "Vet form rejected");
        })?;

        let vet = Self::create(pool, &fields).await?;
        tracing::info!(vet_id = vet.id, "Vet created");
        Ok(vet)
    }

    /// Merge `form` over `existing`, re-validate, and persist.
    pub async fn update_from_form(
        pool: &PgPool,
        existing: &Vet,
        form: &VetForm,
    ) -> Result<Vet, SaveError> {
        let fields = form.merged_onto(&existing.to_form()).check().inspect_err(|errors| {
            tracing::debug!(vet_id = existing.id, %errors, "Vet update rejected");
        })?;

        let vet = Self::update(pool, existing.id, &fields)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tracing::info!(vet_id = vet.id, "Vet updated");
        Ok(vet)
    }
}
