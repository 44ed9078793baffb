//! Handlers for the `/providers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vetsoft_core::error::CoreError;
use vetsoft_core::provider::ProviderForm;
use vetsoft_core::types::DbId;
use vetsoft_db::models::provider::Provider;
use vetsoft_db::repositories::ProviderRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/providers
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let providers = ProviderRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: providers }))
}

/// POST /api/v1/providers
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ProviderForm>,
) -> AppResult<impl IntoResponse> {
    let provider = ProviderRepo::save(&state.pool, &form).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: provider })))
}

/// GET /api/v1/providers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let provider = find_provider(&state, id).await?;
    Ok(Json(DataResponse { data: provider }))
}

/// PUT /api/v1/providers/{id}
///
/// Partial update: only non-empty fields in the body replace stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<ProviderForm>,
) -> AppResult<impl IntoResponse> {
    let existing = find_provider(&state, id).await?;
    let provider = ProviderRepo::update_from_form(&state.pool, &existing, &form).await?;
    Ok(Json(DataResponse { data: provider }))
}

/// DELETE /api/v1/providers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProviderRepo::delete(&state.pool, id).await? {
        tracing::info!(provider_id = id, "Provider deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Provider",
            id,
        }))
    }
}

async fn find_provider(state: &AppState, id: DbId) -> AppResult<Provider> {
    ProviderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Provider",
            id,
        }))
}
