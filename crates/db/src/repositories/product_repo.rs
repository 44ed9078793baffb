//! Repository for the `products` table.

use sqlx::PgPool;
use vetsoft_core::product::{ProductFields, ProductForm};
use vetsoft_core::types::DbId;

use crate::error::SaveError;
use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, name, "type", price, created_at, updated_at"#;

/// Provides CRUD and validated writes for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert an already-validated product, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProductFields) -> Result<Product, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO products (name, "type", price)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Overwrite a product with already-validated values. `None` if missing.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductFields,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            r#"UPDATE products SET name = $2, "type" = $3, price = $4
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Validated writes
    // -----------------------------------------------------------------------

    pub async fn save(pool: &PgPool, form: &ProductForm) -> Result<Product, SaveError> {
        let fields = form.check().inspect_err(|errors| {
            tracing::debug!(%errors, "Product form rejected");
        })?;

        let product = Self::create(pool, &fields).await?;
        tracing::info!(product_id = product.id, price = product.price, "Product created");
        Ok(product)
    }

    /// Merge `form` over `existing`, re-validate, and persist.
    pub async fn update_from_form(
        pool: &PgPool,
        existing: &Product,
        form: &ProductForm,
    ) -> Result<Product, SaveError> {
        let fields = form.merged_onto(&existing.to_form()).check().inspect_err(|errors| {
            tracing::debug!(product_id = existing.id, %errors, "Product update rejected");
        })?;

        let product = Self::update(pool, existing.id, &fields)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tracing::info!(product_id = product.id, "Product updated");
        Ok(product)
    }
}
