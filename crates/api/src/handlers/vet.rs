//! Handlers for the `/vets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vetsoft_core::error::CoreError;
use vetsoft_core::types::DbId;
use vetsoft_core::vet::VetForm;
use vetsoft_db::models::vet::Vet;
use vetsoft_db::repositories::VetRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/vets
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let vets = VetRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: vets }))
}

/// POST /api/v1/vets
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<VetForm>,
) -> AppResult<impl IntoResponse> {
    let vet = VetRepo::save(&state.pool, &form).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: vet })))
}

/// GET /api/v1/vets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let vet = find_vet(&state, id).await?;
    Ok(Json(DataResponse { data: vet }))
}

/// PUT /api/v1/vets/{id}
///
/// Partial update: only non-empty fields in the body replace stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<VetForm>,
) -> AppResult<impl IntoResponse> {
    let existing = find_vet(&state, id).await?;
    let vet = VetRepo::update_from_form(&state.pool, &existing, &form).await?;
    Ok(Json(DataResponse { data: vet }))
}

/// DELETE /api/v1/vets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if VetRepo::delete(&state.pool, id).await? {
        tracing::info!(vet_id = id, "Vet deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vet",
            id,
        }))
    }
}

async fn find_vet(state: &AppState, id: DbId) -> AppResult<Vet> {
    VetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vet",
            id,
        }))
}
