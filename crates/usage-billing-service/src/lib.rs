//! Usage-Billing HTTP API Service.
//!
//! This crate provides the HTTP API for usage-billing:
//!
//! - `GET /usage` - credits charged for each message of the current period
//! - `GET /health` - liveness check
//!
//! Messages and reports are read from the upstream billing data service on
//! every request; nothing is cached between requests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Axum handlers all return Result
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
