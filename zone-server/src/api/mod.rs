//! API routing
//!
//! # Structure
//!
//! - [`health`] - liveness endpoint
//! - [`zones`] - zone CRUD endpoints
//!
//! Each module exposes `router() -> Router<ServerState>`; everything is
//! merged here and the middleware stack applied in one place, so tests
//! can drive the composed app in-process.

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod health;
pub mod zones;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .route("/", get(index))
        .merge(zones::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone())
}

/// GET / - plain text banner, kept verbatim for existing callers
async fn index() -> &'static str {
    "Serveur fonctionne ! Essaye /zones pour voir toutes les zones."
}
