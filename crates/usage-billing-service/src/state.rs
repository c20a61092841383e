//! Application state.

use std::sync::Arc;

use usage_billing_client::{ClientError, ClientOptions, SourceClient};
use usage_billing_core::{CreditCalculator, MessageSource, ReportSource, UsageService};

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Usage computation wired to its sources and calculator.
    pub usage: UsageService,
}

impl AppState {
    /// Create application state backed by the upstream HTTP service.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream client cannot be built.
    pub fn new(config: ServiceConfig) -> Result<Self, ClientError> {
        let client = Arc::new(SourceClient::with_options(
            &config.source_base_url,
            ClientOptions {
                timeout_seconds: config.source_timeout_seconds,
            },
        )?);
        tracing::info!(source_base_url = %client.base_url(), "Upstream source configured");

        Ok(Self::with_sources(config, client.clone(), client))
    }

    /// Create application state with explicit message and report sources.
    #[must_use]
    pub fn with_sources(
        config: ServiceConfig,
        messages: Arc<dyn MessageSource>,
        reports: Arc<dyn ReportSource>,
    ) -> Self {
        let calculator = CreditCalculator::new(Arc::new(config.billing_parameters.clone()));
        let usage = UsageService::new(messages, reports, Arc::new(calculator));

        Self { config, usage }
    }
}
