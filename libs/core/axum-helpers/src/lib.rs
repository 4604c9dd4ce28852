//! # Axum Helpers
//!
//! A collection of utilities and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses; the single place where
//!   application errors become HTTP status codes and JSON bodies
//! - **[`extractors`]**: Custom extractors (validated JSON bodies)
//! - **[`server`]**: Router assembly, liveness endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export server types
pub use server::{create_app, create_router, health_router, shutdown_signal, HealthResponse};
