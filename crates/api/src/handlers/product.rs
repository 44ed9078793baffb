//! Handlers for the `/products` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vetsoft_core::error::CoreError;
use vetsoft_core::product::ProductForm;
use vetsoft_core::types::DbId;
use vetsoft_db::models::product::Product;
use vetsoft_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/products
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ProductForm>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::save(&state.pool, &form).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = find_product(&state, id).await?;
    Ok(Json(DataResponse { data: product }))
}

/// PUT /api/v1/products/{id}
///
/// Partial update: only non-empty fields in the body replace stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<ProductForm>,
) -> AppResult<impl IntoResponse> {
    let existing = find_product(&state, id).await?;
    let product = ProductRepo::update_from_form(&state.pool, &existing, &form).await?;
    Ok(Json(DataResponse { data: product }))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProductRepo::delete(&state.pool, id).await? {
        tracing::info!(product_id = id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}

async fn find_product(state: &AppState, id: DbId) -> AppResult<Product> {
    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
}
