//! Repository for the `clients` table.

use sqlx::PgPool;
use vetsoft_core::client::{ClientFields, ClientForm};
use vetsoft_core::form::FieldErrors;
use vetsoft_core::types::DbId;

use crate::error::SaveError;
use crate::models::client::Client;
use crate::repositories::CityRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, email, city_id, created_at, updated_at";

/// Provides CRUD and validated writes for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert an already-validated client, returning the created row.
    pub async fn create(pool: &PgPool, input: &ClientFields) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, phone, email, city_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(input.phone)
            .bind(&input.email)
            .bind(input.city_id)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Overwrite every column of a client with already-validated values.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ClientFields,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = $2,
                phone = $3,
                email = $4,
                city_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.phone)
            .bind(&input.email)
            .bind(input.city_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Validated writes
    // -----------------------------------------------------------------------

    /// Field errors for `form`, including whether its city exists.
    pub async fn validate(pool: &PgPool, form: &ClientForm) -> Result<FieldErrors, sqlx::Error> {
        let city_exists = city_exists(pool, form).await?;
        Ok(form.validate(city_exists))
    }

    /// Validate `form` and insert it. Nothing is written when it is invalid.
    pub async fn save(pool: &PgPool, form: &ClientForm) -> Result<Client, SaveError> {
        let city_exists = city_exists(pool, form).await?;
        let fields = form.check(city_exists).inspect_err(|errors| {
            tracing::debug!(%errors, "Client form rejected");
        })?;

        let client = Self::create(pool, &fields).await?;
        tracing::info!(client_id = client.id, city_id = client.city_id, "Client created");
        Ok(client)
    }

    /// Apply the non-empty fields of `form` over `existing`, re-validate the
    /// merged client, and persist it. `existing` itself is never modified.
    pub async fn update_from_form(
        pool: &PgPool,
        existing: &Client,
        form: &ClientForm,
    ) -> Result<Client, SaveError> {
        let merged = form.merged_onto(&existing.to_form());
        let city_exists = city_exists(pool, &merged).await?;
        let fields = merged.check(city_exists).inspect_err(|errors| {
            tracing::debug!(client_id = existing.id, %errors, "Client update rejected");
        })?;

        let client = Self::update(pool, existing.id, &fields)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tracing::info!(client_id = client.id, "Client updated");
        Ok(client)
    }
}

async fn city_exists(pool: &PgPool, form: &ClientForm) -> Result<bool, sqlx::Error> {
    match form.city_id() {
        Some(id) => CityRepo::exists(pool, id).await,
        None => Ok(false),
    }
}
