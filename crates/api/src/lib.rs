pub mod config;
pub mod error;
pub mod listeners;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::state::AppState;

/// The full application: routes plus the middleware stack.
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.config().body_limit_bytes;
    routes::build_router(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::request_tracing::trace_layer())
}
