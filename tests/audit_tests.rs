use httpmock::prelude::*;
use page_audit::fetch::PageFetcher;
use page_audit::{Audit, AuditConfig, AuditError, Status};
use std::io::Write;
use std::time::Duration;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Home</title>
</head>
<body>
    <h1>Welcome</h1>
    <h1>News</h1>
    <img src="/hero.jpg">
    <img src="/logo.png" alt="Acme logo">
    <img src="data:image/gif;base64,R0lGODlhAQABAAAAACw=">
</body>
</html>"#;

#[tokio::test]
async fn test_audit_fetches_and_scores_page() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/home");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(PAGE);
    });

    let report = Audit::new(server.url("/home")).run().await.unwrap();
    page_mock.assert();

    assert_eq!(report.title.status, Status::Warning);
    assert_eq!(report.meta_description.status, Status::Bad);
    assert_eq!(report.h1_tags.status, Status::Warning);
    assert_eq!(report.img_alt_tags.status, Status::Warning);
    assert_eq!(report.img_alt_tags.missing_count, Some(1));
    assert_eq!(report.score, 38);
}

#[tokio::test]
async fn test_audit_sends_configured_user_agent() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/")
            .header("user-agent", "page-audit-test/1.0");
        then.status(200).body("<title>Agent checked page</title>");
    });

    let report = Audit::new(server.url("/"))
        .with_user_agent("page-audit-test/1.0")
        .run()
        .await
        .unwrap();

    page_mock.assert();
    assert_eq!(report.title.content, "Agent checked page");
}

#[tokio::test]
async fn test_body_is_decoded_with_declared_charset() {
    // "Café du Monde - Paris" in windows-1252, where é is the single byte 0xE9
    let mut body = b"<html><head><title>Caf".to_vec();
    body.push(0xE9);
    body.extend_from_slice(b" du Monde - Paris</title></head></html>");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latin");
        then.status(200)
            .header("Content-Type", "text/html; charset=windows-1252")
            .body(body);
    });

    let report = Audit::new(server.url("/latin")).run().await.unwrap();
    assert_eq!(report.title.content, "Café du Monde - Paris");
    assert_eq!(report.title.status, Status::Good);
}

#[tokio::test]
async fn test_http_error_status_is_fetch_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("<title>Not Found</title>");
    });

    let err = Audit::new(server.url("/missing")).run().await.unwrap_err();
    assert!(matches!(err, AuditError::Fetch(_)));
    assert!(err.to_string().starts_with("Failed to fetch URL:"));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .delay(Duration::from_secs(3))
            .body("<title>Too late</title>");
    });

    let err = Audit::new(server.url("/slow"))
        .with_timeout(1)
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, AuditError::Fetch(_)));
}

#[tokio::test]
async fn test_invalid_url_is_rejected_before_fetch() {
    let err = Audit::new("not a url").run().await.unwrap_err();
    assert!(matches!(err, AuditError::InvalidInput { .. }));

    let err = Audit::new("").run().await.unwrap_err();
    assert_eq!(err.to_string(), "URL is required");
}

#[tokio::test]
async fn test_fetcher_returns_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/raw");
        then.status(200).body("<p>raw body</p>");
    });

    let fetcher = PageFetcher::new(&AuditConfig::default()).unwrap();
    let url = url::Url::parse(&server.url("/raw")).unwrap();
    assert_eq!(fetcher.fetch(&url).await.unwrap(), "<p>raw body</p>");
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"timeout_secs": 3, "user_agent": "custom-agent", "port": 8088}}"#
    )
    .unwrap();

    let config = AuditConfig::from_file(file.path()).unwrap();
    assert_eq!(config.timeout_secs, 3);
    assert_eq!(config.user_agent, "custom-agent");
    assert_eq!(config.port, 8088);
    assert_eq!(config.bind_address, "127.0.0.1");

    assert!(Audit::new("https://example.com").with_config_file(file.path()).is_ok());
}

#[test]
fn test_config_file_errors() {
    let missing = AuditConfig::from_file("/nonexistent/page-audit.json").unwrap_err();
    assert!(matches!(missing, AuditError::Config { .. }));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let invalid = AuditConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(invalid, AuditError::Serialization(_)));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"timeout_secs": 0}}"#).unwrap();
    let zero = AuditConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(zero, AuditError::Config { .. }));
}
