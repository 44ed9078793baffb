use axum::routing::get;
use axum::Router;

use crate::handlers::city;
use crate::state::AppState;

/// Routes mounted at `/cities`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(city::list).post(city::create))
        .route("/{id}", get(city::get_by_id).delete(city::delete))
}
