//! Pets API routes
//!
//! This module wires up the pets domain to HTTP routes.

use axum::Router;
use domain_pets::{handlers, MongoPetRepository, PetService};

use crate::state::AppState;

/// Create pets router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoPetRepository::new(state.db.clone());

    // Create the service
    let service = PetService::new(repository);

    // Return the domain's router
    handlers::router(service)
}
