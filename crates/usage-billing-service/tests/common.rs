//! Common test utilities for usage-billing integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use usage_billing_core::{
    Credit, Message, MessageId, MessageSource, Report, ReportId, ReportSource, SourceError,
};
use usage_billing_service::{create_router, AppState, ServiceConfig};

/// Messages served from memory, or a failure if `fail` is set.
#[derive(Default)]
pub struct MemoryMessages {
    pub messages: Vec<Message>,
    pub fail: bool,
}

#[async_trait]
impl MessageSource for MemoryMessages {
    async fn fetch_messages(&self) -> Result<Vec<Message>, SourceError> {
        if self.fail {
            return Err(SourceError::retrieval("messages", "HTTP 500"));
        }
        Ok(self.messages.clone())
    }
}

/// Reports served from memory. Ids in `failing` produce retrieval errors.
#[derive(Default)]
pub struct MemoryReports {
    pub reports: HashMap<ReportId, Report>,
    pub failing: Vec<ReportId>,
    pub requested: Mutex<Vec<ReportId>>,
}

#[async_trait]
impl ReportSource for MemoryReports {
    async fn fetch_report(&self, id: ReportId) -> Result<Option<Report>, SourceError> {
        self.requested.lock().unwrap().push(id);
        if self.failing.contains(&id) {
            return Err(SourceError::retrieval(format!("report {id}"), "HTTP 503"));
        }
        Ok(self.reports.get(&id).cloned())
    }
}

/// Build a message.
pub fn message(id: i64, text: &str, report_id: Option<i64>) -> Message {
    Message {
        id: MessageId::new(id),
        timestamp: "2024-04-29T02:08:29.375Z".into(),
        text: text.into(),
        report_id: report_id.map(ReportId::new),
    }
}

/// Build a report.
pub fn report(id: i64, name: &str, credit_cost: Credit) -> Report {
    Report {
        id: ReportId::new(id),
        name: name.into(),
        credit_cost,
    }
}

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The report source, for asserting which reports were requested.
    pub reports: Arc<MemoryReports>,
}

impl TestHarness {
    /// Create a harness serving the given messages and reports.
    pub fn new(messages: Vec<Message>, reports: Vec<Report>) -> Self {
        Self::build(
            MemoryMessages {
                messages,
                fail: false,
            },
            MemoryReports {
                reports: reports.into_iter().map(|r| (r.id, r)).collect(),
                ..MemoryReports::default()
            },
            ServiceConfig::default(),
        )
    }

    /// Create a harness from explicit sources and configuration.
    pub fn build(messages: MemoryMessages, reports: MemoryReports, config: ServiceConfig) -> Self {
        let reports = Arc::new(reports);
        let state = AppState::with_sources(config, Arc::new(messages), reports.clone());
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, reports }
    }

    /// Report ids requested so far, in order.
    pub fn requested_reports(&self) -> Vec<ReportId> {
        self.reports.requested.lock().unwrap().clone()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
