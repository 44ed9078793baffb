//! Handlers for the `/medicines` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vetsoft_core::error::CoreError;
use vetsoft_core::medicine::MedicineForm;
use vetsoft_core::types::DbId;
use vetsoft_db::models::medicine::Medicine;
use vetsoft_db::repositories::MedicineRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/medicines
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let medicines = MedicineRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: medicines }))
}

/// POST /api/v1/medicines
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<MedicineForm>,
) -> AppResult<impl IntoResponse> {
    let medicine = MedicineRepo::save(&state.pool, &form).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: medicine })))
}

/// GET /api/v1/medicines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let medicine = find_medicine(&state, id).await?;
    Ok(Json(DataResponse { data: medicine }))
}

/// PUT /api/v1/medicines/{id}
///
/// Partial update: only non-empty fields in the body replace stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<MedicineForm>,
) -> AppResult<impl IntoResponse> {
    let existing = find_medicine(&state, id).await?;
    let medicine = MedicineRepo::update_from_form(&state.pool, &existing, &form).await?;
    Ok(Json(DataResponse { data: medicine }))
}

/// DELETE /api/v1/medicines/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if MedicineRepo::delete(&state.pool, id).await? {
        tracing::info!(medicine_id = id, "Medicine deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Medicine",
            id,
        }))
    }
}

async fn find_medicine(state: &AppState, id: DbId) -> AppResult<Medicine> {
    MedicineRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Medicine",
            id,
        }))
}
