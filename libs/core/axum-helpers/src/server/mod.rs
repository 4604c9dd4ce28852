//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation and request tracing
//! - Liveness endpoint
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::server::ServerConfig;
//!
//! // Create a router with API documentation
//! let router = create_router::<ApiDoc>(api_routes);
//!
//! // Add the liveness endpoint
//! let app = router.merge(health_router());
//!
//! // Start the server with graceful shutdown
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_app, create_router};
pub use health::{health_router, HealthResponse};
pub use shutdown::shutdown_signal;
