//! Upstream collaborators that supply messages and reports.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::ids::ReportId;
use crate::model::{Message, Report};

/// Supplies the messages of the current billing period.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Fetch every message of the current period, in source order.
    async fn fetch_messages(&self) -> Result<Vec<Message>, SourceError>;
}

/// Looks up pre-priced reports.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch a report by id.
    ///
    /// Returns `Ok(None)` when the source confirms the report does not exist.
    async fn fetch_report(&self, id: ReportId) -> Result<Option<Report>, SourceError>;
}
