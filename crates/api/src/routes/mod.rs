pub mod contact;
pub mod content;
pub mod health;
pub mod page;

use axum::Router;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Assemble the full router with all route groups. The contact form sits
/// outside the shared CORS layer and answers its own preflight.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(content::routes())
        .merge(page::routes())
        .layer(cors_layer())
        .merge(contact::routes())
        .with_state(state)
}
