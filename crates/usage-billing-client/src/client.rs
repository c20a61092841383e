//! Upstream billing data client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use usage_billing_core::{
    Message, MessageSource, MessagesEnvelope, Report, ReportId, ReportSource, SourceError,
};

use crate::error::ClientError;

/// Path of the current period's message listing.
const MESSAGES_PATH: &str = "messages/current-period";

/// How a 404 response is treated by [`SourceClient::fetch_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    /// A 404 is an API error like any other non-success status.
    Fail,
    /// A 404 means the entity does not exist and yields `Ok(None)`.
    Absent,
}

/// Options for [`SourceClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

/// Client for the upstream service that owns messages and reports.
#[derive(Debug, Clone)]
pub struct SourceClient {
    client: Client,
    base_url: String,
}

impl SourceClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Upstream base URL (e.g., `"https://billing-data.internal"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base URL is empty".into()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// The base URL requests are made against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and decode the JSON document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, on any non-success status other
    /// than a 404 under [`NotFound::Absent`], or if the body does not decode
    /// as `T`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        not_found: NotFound,
    ) -> Result<Option<T>, ClientError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(url = %url, "Fetching upstream resource");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND && not_found == NotFound::Absent {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Fetch a document that must exist.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.fetch_json(path, NotFound::Fail)
            .await?
            .ok_or_else(|| ClientError::Api {
                status: StatusCode::NOT_FOUND.as_u16(),
                message: format!("{path} not found"),
            })
    }
}

#[async_trait]
impl MessageSource for SourceClient {
    async fn fetch_messages(&self) -> Result<Vec<Message>, SourceError> {
        match self.get_json::<MessagesEnvelope>(MESSAGES_PATH).await {
            Ok(envelope) => Ok(envelope.messages),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching messages");
                Err(SourceError::retrieval("messages", e))
            }
        }
    }
}

#[async_trait]
impl ReportSource for SourceClient {
    async fn fetch_report(&self, id: ReportId) -> Result<Option<Report>, SourceError> {
        let path = format!("reports/{id}");
        self.fetch_json::<Report>(&path, NotFound::Absent)
            .await
            .map_err(|e| {
                tracing::error!(report_id = %id, error = %e, "Error fetching report");
                SourceError::retrieval(format!("report {id}"), e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = SourceClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = SourceClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn client_rejects_empty_base_url() {
        let err = SourceClient::new("/").unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn default_options() {
        assert_eq!(ClientOptions::default().timeout_seconds, 30);
    }
}
