//! Per-attempt failure logging of the fetch loop.

use ads4gpts_async::types::AdRequest;
use ads4gpts_async::{Ads4GptsConfig, Client, RetryPolicy};
use tracing_test::traced_test;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn every_failed_attempt_is_warned() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/banner_ads"))
        .respond_with(ResponseTemplate::new(403))
        .expect(5)
        .mount(&server)
        .await;

    let config = Ads4GptsConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key");
    let client = Client::with_config(config)
        .unwrap()
        .with_retry_policy(RetryPolicy::new(5, 0.01))
        .unwrap();

    let err = client
        .banner_ads()
        .get(&AdRequest::new("anything"))
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to fetch after 5 attempts"));

    for attempt in 1..=5 {
        let line = format!("Fetch attempt {attempt}/5 failed: HTTP error: 403 Forbidden");
        assert!(logs_contain(&line), "missing log line: {line}");
    }
    assert!(!logs_contain("Fetch attempt 6/5"));
}

#[tokio::test]
#[traced_test]
async fn successful_first_attempt_logs_no_warning() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat_ads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "data": {"ads": {"text": "hello"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Ads4GptsConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key");
    let client = Client::with_config(config).unwrap();

    client
        .chat_ads()
        .get(&AdRequest::new("anything"))
        .await
        .unwrap();

    assert!(!logs_contain("Fetch attempt"));
}
