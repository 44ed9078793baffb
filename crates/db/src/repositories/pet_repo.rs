//! Repository for the `pets` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use vetsoft_core::form::FieldErrors;
use vetsoft_core::pet::{PetFields, PetForm};
use vetsoft_core::types::DbId;

use crate::error::SaveError;
use crate::models::pet::Pet;
use crate::repositories::BreedRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, breed_id, weight, birthday, created_at, updated_at";

/// Provides CRUD and validated writes for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert an already-validated pet, returning the created row.
    pub async fn create(pool: &PgPool, input: &PetFields) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets (name, breed_id, weight, birthday)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(input.breed_id)
            .bind(input.weight)
            .bind(input.birthday)
            .fetch_one(pool)
            .await
    }

    /// Find a pet by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pets in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets ORDER BY id");
        sqlx::query_as::<_, Pet>(&query).fetch_all(pool).await
    }

    /// Overwrite a pet with already-validated values. `None` if missing.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PetFields,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                name = $2,
                breed_id = $3,
                weight = $4,
                birthday = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.breed_id)
            .bind(input.weight)
            .bind(input.birthday)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pet by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Validated writes
    // -----------------------------------------------------------------------

    /// Field errors for `form` as of `today`, including whether its breed exists.
    pub async fn validate(
        pool: &PgPool,
        form: &PetForm,
        today: NaiveDate,
    ) -> Result<FieldErrors, sqlx::Error> {
        let breed_exists = breed_exists(pool, form).await?;
        Ok(form.validate(breed_exists, today))
    }

    /// Validate `form` as of `today` and insert it.
    pub async fn save(pool: &PgPool, form: &PetForm, today: NaiveDate) -> Result<Pet, SaveError> {
        let breed_exists = breed_exists(pool, form).await?;
        let fields = form.check(breed_exists, today).inspect_err(|errors| {
            tracing::debug!(%errors, "Pet form rejected");
        })?;

        let pet = Self::create(pool, &fields).await?;
        tracing::info!(pet_id = pet.id, breed_id = pet.breed_id, "Pet created");
        Ok(pet)
    }

    /// Merge `form` over `existing`, re-validate as of `today`, and persist.
    pub async fn update_from_form(
        pool: &PgPool,
        existing: &Pet,
        form: &PetForm,
        today: NaiveDate,
    ) -> Result<Pet, SaveError> {
        let merged = form.merged_onto(&existing.to_form());
        let breed_exists = breed_exists(pool, &merged).await?;
        let fields = merged.check(breed_exists, today).inspect_err(|errors| {
            tracing::debug!(pet_id = existing.id, %errors, "Pet update rejected");
        })?;

        let pet = Self::update(pool, existing.id, &fields)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tracing::info!(pet_id = pet.id, "Pet updated");
        Ok(pet)
    }
}

async fn breed_exists(pool: &PgPool, form: &PetForm) -> Result<bool, sqlx::Error> {
    match form.breed_id() {
        Some(id) => BreedRepo::exists(pool, id).await,
        None => Ok(false),
    }
}
