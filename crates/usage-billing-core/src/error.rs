//! Error types for usage-billing.

/// Result type for usage-billing operations.
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors that can occur in usage-billing operations.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    /// Billing parameters failed validation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A credit amount could not be represented exactly.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A message or report could not be retrieved.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Failure reported by a message or report source.
///
/// A report that does not exist is not a `SourceError`; report lookups
/// return `Ok(None)` for that case.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The remote collection could not be fetched or decoded.
    #[error("failed to fetch {resource}: {source}")]
    Retrieval {
        /// What was being fetched (e.g. `"messages"`, `"report 42"`).
        resource: String,
        /// Underlying transport or decode error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SourceError {
    /// Wrap an underlying error as a retrieval failure for `resource`.
    pub fn retrieval(
        resource: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Retrieval {
            resource: resource.into(),
            source: source.into(),
        }
    }

    /// The resource that failed to load.
    #[must_use]
    pub fn resource(&self) -> &str {
        match self {
            Self::Retrieval { resource, .. } => resource,
        }
    }
}
