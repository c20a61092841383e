//! Usage handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use usage_billing_core::UsageResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Credits used by every message of the current period, in message order.
pub async fn get_usage(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UsageResponse>, ApiError> {
    tracing::debug!("Computing usage");
    let usage = state.usage.get_usage().await?;
    Ok(Json(usage))
}
