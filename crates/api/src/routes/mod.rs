pub mod breed;
pub mod city;
pub mod client;
pub mod health;
pub mod medicine;
pub mod pet;
pub mod product;
pub mod provider;
pub mod vet;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /cities              list, create
/// /cities/{id}         get, delete (cascades to clients)
/// /breeds              list, create
/// /breeds/{id}         get, delete (cascades to pets)
///
/// /clients             list, create
/// /clients/{id}        get, update, delete
/// /vets                list, create
/// /vets/{id}           get, update, delete
/// /providers           list, create
/// /providers/{id}      get, update, delete
/// /products            list, create
/// /products/{id}       get, update, delete
/// /medicines           list, create
/// /medicines/{id}      get, update, delete
/// /pets                list, create
/// /pets/{id}           get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Lookup tables.
        .nest("/cities", city::router())
        .nest("/breeds", breed::router())
        // Validated entities.
        .nest("/clients", client::router())
        .nest("/vets", vet::router())
        .nest("/providers", provider::router())
        .nest("/products", product::router())
        .nest("/medicines", medicine::router())
        .nest("/pets", pet::router())
}
