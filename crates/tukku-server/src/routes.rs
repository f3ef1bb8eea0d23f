//! Router assembly.

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use tukku_core::repository::{CatalogSource, ClientDirectory, RevocationStore};

use crate::handlers;
use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Build the portal router with CORS handling on every route.
pub fn build_router<D, R>(state: AppState<D, R>) -> Router
where
    D: ClientDirectory + CatalogSource + Clone + Send + Sync + 'static,
    R: RevocationStore + 'static,
{
    Router::new()
        .route("/health", get(handlers::health::<D, R>))
        .route("/clients", get(handlers::clients::<D, R>))
        .route("/login", post(handlers::login::<D, R>))
        .route("/logout", post(handlers::logout::<D, R>))
        .route("/profile", get(handlers::profile::<D, R>))
        .route("/products", get(handlers::products::<D, R>))
        .layer(from_fn_with_state(state.clone(), cors_middleware::<D, R>))
        .with_state(state)
}
