//! Health check handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the service answers.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Where the billing parameters came from: `"default"` or `"file"`.
    pub billing_parameters: &'static str,
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let billing_parameters = if state.config.billing_parameters_path.is_some() {
        "file"
    } else {
        "default"
    };

    Json(HealthResponse {
        status: "ok",
        service: "usage-billing",
        version: env!("CARGO_PKG_VERSION"),
        billing_parameters,
    })
}
