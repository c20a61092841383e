//! Usage-Billing Service - HTTP API for message credit usage
//!
//! This is the main entry point for the usage-billing service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use usage_billing_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,usage_billing=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Usage-Billing Service");

    // Invalid billing parameters are fatal: never serve with them.
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid service configuration");
            return Err(e.into());
        }
    };

    tracing::info!(
        listen_addr = %config.listen_addr,
        source_base_url = %config.source_base_url,
        billing_parameters_path = ?config.billing_parameters_path,
        "Service configuration loaded"
    );

    let listen_addr = config.listen_addr.clone();
    let state = AppState::new(config)?;
    let app = create_router(state);

    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
