//! Handlers for the `/pets` resource.
//!
//! Birthdays are checked against the server's local calendar date.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use vetsoft_core::error::CoreError;
use vetsoft_core::pet::PetForm;
use vetsoft_core::types::DbId;
use vetsoft_db::models::pet::Pet;
use vetsoft_db::repositories::PetRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/pets
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pets = PetRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: pets }))
}

/// POST /api/v1/pets
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<PetForm>,
) -> AppResult<impl IntoResponse> {
    let pet = PetRepo::save(&state.pool, &form, today()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: pet })))
}

/// GET /api/v1/pets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pet = find_pet(&state, id).await?;
    Ok(Json(DataResponse { data: pet }))
}

/// PUT /api/v1/pets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<PetForm>,
) -> AppResult<impl IntoResponse> {
    let existing = find_pet(&state, id).await?;
    let pet = PetRepo::update_from_form(&state.pool, &existing, &form, today()).await?;
    Ok(Json(DataResponse { data: pet }))
}

/// DELETE /api/v1/pets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PetRepo::delete(&state.pool, id).await? {
        tracing::info!(pet_id = id, "Pet deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Pet", id }))
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

async fn find_pet(state: &AppState, id: DbId) -> AppResult<Pet> {
    PetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet", id }))
}
