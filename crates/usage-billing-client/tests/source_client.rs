//! HTTP source integration tests against a mock upstream.

use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use usage_billing_client::{ClientError, NotFound, SourceClient};
use usage_billing_core::{
    Credit, MessageId, MessageSource, MessagesEnvelope, ReportId, ReportSource,
};

async fn client_for(server: &MockServer) -> SourceClient {
    SourceClient::new(server.uri()).expect("Failed to build client")
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn fetch_messages_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages/current-period"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [
                { "id": 1, "timestamp": "2024-01-01T00:00:00", "text": "Test message 1" },
                { "id": 2, "timestamp": "2024-01-01T00:00:00", "text": "Test message 1", "report_id": null },
                { "id": 3, "timestamp": "2024-01-01T00:00:01", "text": "Test message 2", "report_id": 123 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let messages = client_for(&server).await.fetch_messages().await.unwrap();

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].id, MessageId::new(1));
    assert_eq!(messages[0].text, "Test message 1");
    assert_eq!(messages[0].report_id, None);
    assert_eq!(messages[1].report_id, None);
    assert_eq!(messages[2].report_id, Some(ReportId::new(123)));
}

#[tokio::test]
async fn fetch_messages_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages/current-period"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_messages().await.unwrap_err();

    assert_eq!(err.resource(), "messages");
}

#[tokio::test]
async fn fetch_messages_not_found_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages/current-period"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(client_for(&server).await.fetch_messages().await.is_err());
}

#[tokio::test]
async fn fetch_messages_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages/current-period"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_messages().await.unwrap_err();

    assert!(err.to_string().starts_with("failed to fetch messages"));
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn fetch_report_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 123,
            "name": "Test Report",
            "credit_cost": "15.5"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server)
        .await
        .fetch_report(ReportId::new(123))
        .await
        .unwrap()
        .expect("report should exist");

    assert_eq!(report.id, ReportId::new(123));
    assert_eq!(report.name, "Test Report");
    assert_eq!(report.credit_cost, Credit::new(dec!(15.5)));
}

#[tokio::test]
async fn fetch_report_numeric_cost() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/5392"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5392,
            "name": "Tenant Obligations Report",
            "credit_cost": 79
        })))
        .mount(&server)
        .await;

    let report = client_for(&server)
        .await
        .fetch_report(ReportId::new(5392))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.credit_cost, Credit::from_int(79));
}

#[tokio::test]
async fn fetch_report_not_found_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/999"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server)
        .await
        .fetch_report(ReportId::new(999))
        .await
        .unwrap();

    assert!(report.is_none());
}

#[tokio::test]
async fn fetch_report_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/123"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_report(ReportId::new(123))
        .await
        .unwrap_err();

    assert_eq!(err.resource(), "report 123");
}

// ============================================================================
// Generic fetch
// ============================================================================

#[tokio::test]
async fn fetch_json_not_found_policy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such thing"))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let absent = client
        .fetch_json::<MessagesEnvelope>("missing", NotFound::Absent)
        .await
        .unwrap();
    assert!(absent.is_none());

    let err = client
        .fetch_json::<MessagesEnvelope>("/missing", NotFound::Fail)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, ClientError::Api { ref message, .. } if message == "no such thing"));
}

#[tokio::test]
async fn trailing_slash_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages/current-period"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "messages": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SourceClient::new(format!("{}/", server.uri())).unwrap();
    let messages = client.fetch_messages().await.unwrap();

    assert!(messages.is_empty());
}
