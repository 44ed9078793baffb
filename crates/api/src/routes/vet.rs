use axum::routing::get;
use axum::Router;

use crate::handlers::vet;
use crate::state::AppState;

/// Routes mounted at `/vets`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vet::list).post(vet::create))
        .route(
            "/{id}",
            get(vet::get_by_id).put(vet::update).delete(vet::delete),
        )
}
