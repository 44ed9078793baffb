//! Handlers for the `/breeds` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;
use vetsoft_core::error::CoreError;
use vetsoft_core::types::DbId;
use vetsoft_db::models::breed::CreateBreed;
use vetsoft_db::repositories::BreedRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/breeds
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let breeds = BreedRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: breeds }))
}

/// POST /api/v1/breeds
///
/// Duplicate names are rejected with 409 by the `uq_breeds_name` constraint.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBreed>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let breed = BreedRepo::create(&state.pool, &input).await?;
    tracing::info!(breed_id = breed.id, name = %breed.name, "Breed created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: breed })))
}

/// GET /api/v1/breeds/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let breed = BreedRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Breed", id }))?;
    Ok(Json(DataResponse { data: breed }))
}

/// DELETE /api/v1/breeds/{id}
///
/// Pets of the breed are deleted with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if BreedRepo::delete(&state.pool, id).await? {
        tracing::info!(breed_id = id, "Breed deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Breed", id }))
    }
}
