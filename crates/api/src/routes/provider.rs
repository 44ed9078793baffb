use axum::routing::get;
use axum::Router;

use crate::handlers::provider;
use crate::state::AppState;

/// Routes mounted at `/providers`.
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
        .route("/", get(provider::list).post(provider::create))
        .route(
            "/{id}",
            get(provider::get_by_id).put(provider::update).delete(provider::delete),
        )
}
