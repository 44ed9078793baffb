//! Repository for the `providers` table.

use sqlx::PgPool;
use vetsoft_core::provider::{ProviderFields, ProviderForm};
use vetsoft_core::types::DbId;

use crate::error::SaveError;
use crate::models::provider::Provider;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, email, address, floor_or_unit, created_at, updated_at";

/// Provides CRUD and validated writes for providers.
pub struct ProviderRepo;

impl ProviderRepo {
    /// Insert an already-validated provider, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProviderFields) -> Result<Provider, sqlx::Error> {
        let query = format!(
            "INSERT INTO providers (name, phone, email, address, floor_or_unit)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Provider>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.floor_or_unit)
            .fetch_one(pool)
            .await
    }

    /// Find a provider by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Provider>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM providers WHERE id = $1");
        sqlx::query_as::<_, Provider>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all providers in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Provider>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM providers ORDER BY id");
        sqlx::query_as::<_, Provider>(&query).fetch_all(pool).await
    }

    /// Overwrite a provider with already-validated values. `None` if missing.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProviderFields,
    ) -> Result<Option<Provider>, sqlx::Error> {
        let query = format!(
            "UPDATE providers SET
                name = $2,
                phone = $3,
                email = $4,
                address = $5,
                floor_or_unit = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Provider>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.floor_or_unit)
            .fetch_optional(pool)
            .await
    }

    /// Delete a provider by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM providers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Validated writes
    // -----------------------------------------------------------------------

    pub async fn save(pool: &PgPool, form: &ProviderForm) -> Result<Provider, SaveError> {
        let fields = form.check().inspect_err(|errors| {
            tracing::debug!(%errors, "Provider form rejected");
        })?;

        let provider = Self::create(pool, &fields).await?;
        tracing::info!(provider_id = provider.id, "Provider created");
        Ok(provider)
    }

    /// Merge `form` over `existing`, re-validate, and persist.
    ///
    /// Submitting an empty value for a field keeps the stored one.
    pub async fn update_from_form(
        pool: &PgPool,
        existing: &Provider,
        form: &ProviderForm,
    ) -> Result<Provider, SaveError> {
        let fields = form.merged_onto(&existing.to_form()).check().inspect_err(|errors| {
            tracing::debug!(provider_id = existing.id, %errors, "Provider update rejected");
        })?;

        let provider = Self::update(pool, existing.id, &fields)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tracing::info!(provider_id = provider.id, "Provider updated");
        Ok(provider)
    }
}
