//! HTTP sources for usage-billing.
//!
//! [`SourceClient`] reads messages and reports from the upstream billing data
//! service and implements the [`MessageSource`] and [`ReportSource`] traits.
//!
//! # Example
//!
//! ```no_run
//! use usage_billing_client::SourceClient;
//! use usage_billing_core::MessageSource;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SourceClient::new("https://billing-data.internal")?;
//! let messages = client.fetch_messages().await?;
//! println!("{} messages this period", messages.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`MessageSource`]: usage_billing_core::MessageSource
//! [`ReportSource`]: usage_billing_core::ReportSource

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;

pub use client::{ClientOptions, NotFound, SourceClient};
pub use error::ClientError;
