//! Core types and scoring logic for usage-billing.
//!
//! This crate provides everything needed to price a period's messages:
//!
//! - **Credits**: `Credit`, an exact-decimal monetary value
//! - **Parameters**: `BillingParameters`, the validated cost constants
//! - **Rules**: the six text-scoring rules in [`rules`]
//! - **Calculator**: `CreditCalculator`, which composes the rules
//! - **Usage**: `UsageService` and [`aggregate_usage`], which price each message
//!   either from its linked report or from its text
//!
//! # Credit Unit
//!
//! Credits are exact decimals (`rust_decimal::Decimal`). Amounts such as `0.05`
//! are never stored as binary floats; conversion to `f64` happens only when a
//! usage entry is serialized.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculator;
pub mod credit;
pub mod error;
pub mod ids;
pub mod model;
pub mod parameters;
pub mod rules;
pub mod source;
pub mod usage;
pub mod words;

pub use calculator::{CreditBreakdown, CreditCalculator, CreditPricing};
pub use credit::Credit;
pub use error::{BillingError, Result, SourceError};
pub use ids::{MessageId, ReportId};
pub use model::{Message, MessagesEnvelope, Report, UsageEntry, UsageResponse};
pub use parameters::{BillingParameters, BillingParametersConfig, DEFAULT_VOWELS};
pub use source::{MessageSource, ReportSource};
pub use usage::{aggregate_usage, UsageService};
pub use words::{is_word, valid_words};
