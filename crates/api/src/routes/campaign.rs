//! Route definitions for the `/campaigns` resource.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::campaign;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /campaigns/         -> list
/// POST   /campaigns/         -> create
/// GET    /campaigns/choices/ -> choices
/// GET    /campaigns/{id}/    -> get_by_id
/// PUT    /campaigns/{id}/    -> update
/// PATCH  /campaigns/{id}/    -> partial_update
/// DELETE /campaigns/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = || -> MethodRouter<AppState> { get(campaign::list).post(campaign::create) };
    let item = || -> MethodRouter<AppState> {
        get(campaign::get_by_id)
            .put(campaign::update)
            .patch(campaign::partial_update)
            .delete(campaign::delete)
    };

    Router::new()
        .route("/campaigns/", collection())
        .route("/campaigns", collection())
        .route("/campaigns/choices/", get(campaign::choices))
        .route("/campaigns/choices", get(campaign::choices))
        .route("/campaigns/{id}/", item())
        .route("/campaigns/{id}", item())
}
