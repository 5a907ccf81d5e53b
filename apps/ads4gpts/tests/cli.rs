//! Integration tests for the ads4gpts binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ads4gpts_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("ads4gpts");
    cmd.env_remove("ADS4GPTS_API_KEY")
        .env_remove("ADS4GPTS_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn schemas_lists_both_tools_without_api_key() {
    let out = ads4gpts_cmd()
        .args(["schemas", "--provider", "openai"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tools: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(tools[0]["function"]["name"], "ads4gpts_banner_tool");
    assert_eq!(tools[1]["function"]["name"], "ads4gpts_chat_tool");
}

#[test]
fn schemas_renders_mcp_input_schema() {
    ads4gpts_cmd()
        .args(["schemas", "--provider", "mcp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"inputSchema\""));
}

#[test]
fn schemas_ignores_retry_flags_and_key() {
    ads4gpts_cmd()
        .args(["schemas", "--provider", "anthropic", "--max-attempts", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input_schema\""));
}

#[test]
fn missing_api_key_fails_before_any_request() {
    ads4gpts_cmd()
        .args(["banner", "--context", "coffee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ADS4GPTS_API_KEY"));
}

#[test]
fn zero_attempts_is_rejected() {
    ads4gpts_cmd()
        .args(["chat", "--context", "coffee", "--api-key", "k", "--max-attempts", "0"])
        .assert()
        .failure();
}

#[tokio::test(flavor = "multi_thread")]
async fn banner_prints_normalized_ads() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/banner_ads"))
        .and(header("authorization", "Bearer cli-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"ads": [{"ad_title": "Phone"}, {"ad_title": "Tablet"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let out = tokio::task::spawn_blocking(move || {
        ads4gpts_cmd()
            .args(["banner", "--context", "smartphone deals", "--num-ads", "2"])
            .args(["--api-key", "cli-key", "--base-url", &uri])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    })
    .await
    .unwrap();

    let ads: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(ads.as_array().map(Vec::len), Some(2));
    assert_eq!(ads[1]["title"], "Tablet");
}
