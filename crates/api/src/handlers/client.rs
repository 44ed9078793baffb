//! Handlers for the `/clients` resource.
//!
//! Creates and updates go through the validated repository writes; a
//! rejected form comes back as 400 with one message per field.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vetsoft_core::client::ClientForm;
use vetsoft_core::error::CoreError;
use vetsoft_core::types::DbId;
use vetsoft_db::models::client::Client;
use vetsoft_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: clients }))
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ClientForm>,
) -> AppResult<impl IntoResponse> {
    let client = ClientRepo::save(&state.pool, &form).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: client })))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let client = find_client(&state, id).await?;
    Ok(Json(DataResponse { data: client }))
}

/// PUT /api/v1/clients/{id}
///
/// Partial update: only non-empty fields in the body replace stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<ClientForm>,
) -> AppResult<impl IntoResponse> {
    let existing = find_client(&state, id).await?;
    let client = ClientRepo::update_from_form(&state.pool, &existing, &form).await?;
    Ok(Json(DataResponse { data: client }))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ClientRepo::delete(&state.pool, id).await? {
        tracing::info!(client_id = id, "Client deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}

async fn find_client(state: &AppState, id: DbId) -> AppResult<Client> {
    ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
}
