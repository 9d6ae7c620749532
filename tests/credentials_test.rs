//! Token file handling from the CLI through to request headers.

use std::fs;
use std::sync::Arc;

use serde_json::{json, Value};
use studio::adapters::{FileCredentialsProvider, ReqwestHttpClient};
use studio::api::{ApiClient, RequestConfig};
use studio::auth::{CredentialsManager, AUTH_TOKEN_KEY};
use studio::cli::{parse_args, run_cli_command, CliCommand};
use studio::config::StudioConfig;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_token_dir(server: &MockServer, dir: &TempDir) -> ApiClient {
    ApiClient::new(
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(FileCredentialsProvider::in_dir(dir.path())),
    )
    .with_base_url(server.uri())
}

fn authorization(request: &wiremock::Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn test_token_set_from_cli_is_sent() {
    let temp_dir = TempDir::new().unwrap();
    let config = StudioConfig::new().with_data_dir(temp_dir.path());

    let args = ["studio", "--set-token", " secret-token "].map(String::from);
    let command = parse_args(args.into_iter());
    assert_eq!(command, CliCommand::SetToken("secret-token".to_string()));
    run_cli_command(&command, &config).unwrap().unwrap();

    let stored: Value =
        serde_json::from_str(&fs::read_to_string(temp_dir.path().join("storage.json")).unwrap())
            .unwrap();
    assert_eq!(stored[AUTH_TOKEN_KEY], "secret-token");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token_dir(&server, &temp_dir);
    client
        .get::<Value>("/history", RequestConfig::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_token_is_read_on_every_request() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_with_token_dir(&server, &temp_dir);
    client
        .get::<Value>("/history", RequestConfig::new())
        .await
        .unwrap();

    fs::write(
        temp_dir.path().join("storage.json"),
        r#"{"authToken": "late-token", "theme": "dark"}"#,
    )
    .unwrap();
    client
        .get::<Value>("/history", RequestConfig::new())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(authorization(&requests[0]), None);
    assert_eq!(authorization(&requests[1]).as_deref(), Some("Bearer late-token"));
}

#[tokio::test]
async fn test_corrupt_token_file_sends_without_authorization() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("storage.json"), "not json").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token_dir(&server, &temp_dir);
    let result = client.get::<Value>("/history", RequestConfig::new()).await;

    assert!(result.is_ok());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(authorization(&requests[0]), None);
}

#[test]
fn test_clear_token_from_cli() {
    let temp_dir = TempDir::new().unwrap();
    let config = StudioConfig::new().with_data_dir(temp_dir.path());
    let manager = CredentialsManager::in_dir(temp_dir.path());

    run_cli_command(&CliCommand::SetToken("tok".to_string()), &config)
        .unwrap()
        .unwrap();
    assert!(manager.load().unwrap().has_token());

    let command = parse_args(["studio", "--clear-token"].map(String::from).into_iter());
    run_cli_command(&command, &config).unwrap().unwrap();
    assert!(!manager.storage_path().exists());

    // Clearing twice is fine.
    run_cli_command(&command, &config).unwrap().unwrap();
}
