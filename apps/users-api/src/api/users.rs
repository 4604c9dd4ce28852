//! Users API routes
//!
//! This module wires up the users domain to HTTP routes.

use axum::Router;
use domain_users::{InMemoryUserRepository, UserService, handlers};

/// Create the users router backed by the process-lifetime in-memory store
pub fn router() -> Router {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository);

    // Return the domain's router
    handlers::router(service)
}
