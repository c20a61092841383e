//! Usage aggregation.
//!
//! Every message is priced in input order. A message linked to a report that
//! the report source can resolve is charged the report's price; any other
//! message is priced from its text. Lookups run one at a time, and the first
//! retrieval failure aborts the whole aggregation.

use std::sync::Arc;

use crate::calculator::CreditPricing;
use crate::error::Result;
use crate::model::{Message, UsageEntry, UsageResponse};
use crate::source::{MessageSource, ReportSource};

/// Price `messages` in order.
///
/// # Errors
///
/// Returns [`crate::BillingError::Source`] if any report lookup fails for a
/// reason other than the report not existing. No partial usage is returned.
pub async fn aggregate_usage<R, P>(
    messages: &[Message],
    reports: &R,
    pricing: &P,
) -> Result<UsageResponse>
where
    R: ReportSource + ?Sized,
    P: CreditPricing + ?Sized,
{
    let mut usage = Vec::with_capacity(messages.len());

    for message in messages {
        let report = match message.report_id {
            Some(report_id) => {
                let report = reports.fetch_report(report_id).await?;
                if report.is_none() {
                    tracing::debug!(
                        message_id = %message.id,
                        report_id = %report_id,
                        "Report not found, pricing message text"
                    );
                }
                report
            }
            None => None,
        };

        let entry = match report {
            Some(report) => {
                tracing::debug!(
                    message_id = %message.id,
                    report_id = %report.id,
                    credits = %report.credit_cost,
                    "Charging report price"
                );
                UsageEntry::new(message, Some(report.name), report.credit_cost)
            }
            None => {
                let credits = pricing.calculate_credits(&message.text);
                tracing::debug!(
                    message_id = %message.id,
                    credits = %credits,
                    "Charging calculated price"
                );
                UsageEntry::new(message, None, credits)
            }
        };

        usage.push(entry);
    }

    Ok(UsageResponse { usage })
}

/// Computes the current period's usage from its collaborators.
#[derive(Clone)]
pub struct UsageService {
    messages: Arc<dyn MessageSource>,
    reports: Arc<dyn ReportSource>,
    pricing: Arc<dyn CreditPricing>,
}

impl UsageService {
    /// Create a usage service.
    #[must_use]
    pub fn new(
        messages: Arc<dyn MessageSource>,
        reports: Arc<dyn ReportSource>,
        pricing: Arc<dyn CreditPricing>,
    ) -> Self {
        Self {
            messages,
            reports,
            pricing,
        }
    }

    /// Fetch the current period's messages and price each one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BillingError::Source`] if the messages or any report
    /// cannot be retrieved.
    pub async fn get_usage(&self) -> Result<UsageResponse> {
        let messages = self.messages.fetch_messages().await?;
        let response =
            aggregate_usage(&messages, self.reports.as_ref(), self.pricing.as_ref()).await?;

        tracing::info!(entries = response.usage.len(), "Usage computed");
        Ok(response)
    }
}

impl std::fmt::Debug for UsageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsageService").finish_non_exhaustive()
    }
}
