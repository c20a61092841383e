//! Service configuration.

use std::path::Path;

use usage_billing_core::{BillingError, BillingParameters};

/// Default upstream service holding messages and reports.
pub const DEFAULT_SOURCE_BASE_URL: &str = "https://owpublic.blob.core.windows.net/tech-task";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Base URL of the message and report service.
    pub source_base_url: String,

    /// Timeout for each upstream request in seconds.
    pub source_timeout_seconds: u64,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// File the billing parameters were loaded from, if not the defaults.
    pub billing_parameters_path: Option<String>,

    /// Validated billing parameters.
    pub billing_parameters: BillingParameters,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `BILLING_PARAMETERS_PATH`, when set, must name a JSON file holding
    /// valid billing parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Configuration`] if the billing parameters file
    /// cannot be read or fails validation.
    pub fn from_env() -> Result<Self, BillingError> {
        let billing_parameters_path = std::env::var("BILLING_PARAMETERS_PATH").ok();
        let billing_parameters = match &billing_parameters_path {
            Some(path) => {
                let params = load_billing_parameters(path)?;
                tracing::info!(path = %path, "Loaded billing parameters from file");
                params
            }
            None => {
                tracing::debug!("BILLING_PARAMETERS_PATH not set, using default billing parameters");
                BillingParameters::default()
            }
        };

        Ok(Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            source_base_url: std::env::var("SOURCE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_SOURCE_BASE_URL.into()),
            source_timeout_seconds: std::env::var("SOURCE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            billing_parameters_path,
            billing_parameters,
        })
    }
}

/// Load and validate billing parameters from a JSON file.
///
/// # Errors
///
/// Returns [`BillingError::Configuration`] if the file cannot be read, is not
/// valid JSON, or holds invalid parameters.
pub fn load_billing_parameters(path: impl AsRef<Path>) -> Result<BillingParameters, BillingError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        BillingError::Configuration(format!("cannot read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&contents)
        .map_err(|e| BillingError::Configuration(format!("invalid {}: {e}", path.display())))
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            source_base_url: DEFAULT_SOURCE_BASE_URL.into(),
            source_timeout_seconds: 30,
            cors_origins: vec!["*".into()],
            request_timeout_seconds: 30,
            billing_parameters_path: None,
            billing_parameters: BillingParameters::default(),
        }
    }
}
