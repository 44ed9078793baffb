//! Handlers for the `/cities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;
use vetsoft_core::error::CoreError;
use vetsoft_core::types::DbId;
use vetsoft_db::models::city::CreateCity;
use vetsoft_db::repositories::CityRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cities
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cities = CityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: cities }))
}

/// POST /api/v1/cities
///
/// Duplicate names are rejected with 409 by the `uq_cities_name` constraint.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCity>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let city = CityRepo::create(&state.pool, &input).await?;
    tracing::info!(city_id = city.id, name = %city.name, "City created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: city })))
}

/// GET /api/v1/cities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let city = CityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;
    Ok(Json(DataResponse { data: city }))
}

/// DELETE /api/v1/cities/{id}
///
/// Clients in the city are deleted with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CityRepo::delete(&state.pool, id).await? {
        tracing::info!(city_id = id, "City deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "City", id }))
    }
}
