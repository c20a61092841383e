//! Message, report and usage records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::credit::Credit;
use crate::ids::{MessageId, ReportId};

/// A message sent during the current billing period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier.
    pub id: MessageId,
    /// When the message was sent. Passed through verbatim, never parsed.
    pub timestamp: String,
    /// Message body.
    pub text: String,
    /// Report generated from this message, if any.
    #[serde(default)]
    pub report_id: Option<ReportId>,
}

/// Body of the message source's current-period listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesEnvelope {
    /// Messages in source order.
    pub messages: Vec<Message>,
}

/// A pre-priced report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report identifier.
    pub id: ReportId,
    /// Human-readable report name.
    pub name: String,
    /// Fixed price of the report.
    pub credit_cost: Credit,
}

/// Credits charged for one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    /// The message that was charged.
    pub message_id: MessageId,
    /// The message's timestamp, unmodified.
    pub timestamp: String,
    /// Name of the report whose price was charged, if a report was used.
    pub report_name: Option<String>,
    /// Credits charged.
    #[serde(with = "rust_decimal::serde::float")]
    pub credits_used: Decimal,
}

impl UsageEntry {
    /// Build an entry for `message` charged `credits`.
    #[must_use]
    pub fn new(message: &Message, report_name: Option<String>, credits: Credit) -> Self {
        Self {
            message_id: message.id,
            timestamp: message.timestamp.clone(),
            report_name,
            credits_used: credits.amount(),
        }
    }
}

/// Usage for the current period, in message order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageResponse {
    /// One entry per message.
    pub usage: Vec<UsageEntry>,
}
