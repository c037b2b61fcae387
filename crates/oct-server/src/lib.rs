//! Octavia HTTP API server (Axum).
//!
//! Converts decimal numbers or raw digit text to ring counts under each
//! policy, and exports the drawing as SVG.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with default state.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::policy_routes())
        .merge(routes::ring_routes())
        .with_state(state)
}
