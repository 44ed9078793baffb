//! Repository for the `medicines` table.

use sqlx::PgPool;
use vetsoft_core::medicine::{MedicineFields, MedicineForm};
use vetsoft_core::types::DbId;

use crate::error::SaveError;
use crate::models::medicine::Medicine;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, dose, created_at, updated_at";

/// Provides CRUD and validated writes for medicines.
pub struct MedicineRepo;

impl MedicineRepo {
    /// Insert an already-validated medicine, returning the created row.
    pub async fn create(pool: &PgPool, input: &MedicineFields) -> Result<Medicine, sqlx::Error> {
        let query = format!(
            "INSERT INTO medicines (name, description, dose)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Medicine>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.dose)
            .fetch_one(pool)
            .await
    }

    /// Find a medicine by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Medicine>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medicines WHERE id = $1");
        sqlx::query_as::<_, Medicine>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Medicine>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medicines ORDER BY id");
        sqlx::query_as::<_, Medicine>(&query).fetch_all(pool).await
    }

    /// Overwrite a medicine with already-validated values. `None` if missing.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MedicineFields,
    ) -> Result<Option<Medicine>, sqlx::Error> {
        let query = format!(
            "UPDATE medicines SET name = $2, description = $3, dose = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Medicine>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.dose)
            .fetch_optional(pool)
            .await
    }

    /// Delete a medicine by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM medicines WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Validated writes
    // -----------------------------------------------------------------------

    pub async fn save(pool: &PgPool, form: &MedicineForm) -> Result<Medicine, SaveError> {
        let fields = form.check().inspect_err(|errors| {
            tracing::debug!(%errors, "Medicine form rejected");
        })?;

        let medicine = Self::create(pool, &fields).await?;
        tracing::info!(medicine_id = medicine.id, dose = medicine.dose, "Medicine created");
        Ok(medicine)
    }

    /// Merge `form` over `existing`, re-validate, and persist.
    pub async fn update_from_form(
        pool: &PgPool,
        existing: &Medicine,
        form: &MedicineForm,
    ) -> Result<Medicine, SaveError> {
        let fields = form.merged_onto(&existing.to_form()).check().inspect_err(|errors| {
            tracing::debug!(medicine_id = existing.id, %errors, "Medicine update rejected");
        })?;

        let medicine = Self::update(pool, existing.id, &fields)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tracing::info!(medicine_id = medicine.id, "Medicine updated");
        Ok(medicine)
    }
}
