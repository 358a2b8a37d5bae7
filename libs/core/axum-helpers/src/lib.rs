//! Shared axum building blocks for HTTP services.
//!
//! The errors module owns boundary classification: domain errors convert
//! into [`AppError`], which picks the status code, logs, and serializes the
//! `{"message": ...}` JSON envelope.

pub mod errors;

pub use errors::{AppError, ErrorResponse};
