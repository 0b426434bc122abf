//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::{get, post};

use citydir_app::ports::CatalogRepository;

use crate::state::AppState;

/// Build the API router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CatalogRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/cities", get(services::cities::<R>))
        .route("/services/{city}", get(services::by_city::<R>))
        .route("/services/by-name/{name}", get(services::by_name::<R>))
        .route("/submit-service", post(services::submit::<R>))
}
