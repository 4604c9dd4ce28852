//! Custom extractors for Axum handlers.
//!
//! These reduce boilerplate and standardize error handling across APIs.

pub mod validated_json;

pub use validated_json::ValidatedJson;
