//! Apexverse site API server library.
//!
//! Exposes config, state, error handling, handlers and routes so the
//! integration tests and both binaries can build the same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod json;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
