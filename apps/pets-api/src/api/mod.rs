//! API routes module
//!
//! This module defines all HTTP API routes for the Pets API.

pub mod health;
pub mod pets;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::server::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/pets", pets::router(state))
        .merge(health::router(state.clone()))
}
