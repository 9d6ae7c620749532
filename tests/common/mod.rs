//! Common test utilities for integration tests.
//!
//! Builds API clients wired to a wiremock server and provides JSON bodies
//! shaped like the backend's responses.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! let client = client_for(&server, Some(TEST_TOKEN));
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use studio::adapters::{InMemoryCredentials, ReqwestHttpClient};
use studio::api::ApiClient;
use studio::services::{GenerationService, HistoryService};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-auth-token";

/// Client against `server` over real HTTP, with an optional stored token.
pub fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
    let credentials = match token {
        Some(token) => InMemoryCredentials::with_token(token),
        None => InMemoryCredentials::new(),
    };
    ApiClient::new(Arc::new(ReqwestHttpClient::new()), Arc::new(credentials))
        .with_base_url(server.uri())
        .with_default_timeout(Duration::from_secs(5))
}

pub fn services_for(server: &MockServer) -> (GenerationService, HistoryService) {
    let client = client_for(server, Some(TEST_TOKEN));
    (
        GenerationService::new(client.clone()).with_timeout(Duration::from_secs(5)),
        HistoryService::new(client),
    )
}

/// A completed text generation.
pub fn completed_generation(content_type: &str, result: &str) -> Value {
    json!({
        "id": "gen-1",
        "type": content_type,
        "status": "completed",
        "result": result,
        "createdAt": "2024-03-05T10:00:00.000Z",
        "updatedAt": "2024-03-05T10:00:05.000Z"
    })
}

/// A completed image generation.
pub fn image_generation(content_type: &str, urls: &[&str]) -> Value {
    json!({
        "id": "gen-2",
        "type": content_type,
        "status": "completed",
        "resultUrl": urls,
        "createdAt": "2024-03-05T10:00:00.000Z",
        "updatedAt": "2024-03-05T10:00:05.000Z"
    })
}

/// A stored history item as `GET /history` returns it.
pub fn history_item(id: &str, content_type: &str, prompt: &str) -> Value {
    json!({
        "_id": id,
        "type": content_type,
        "prompt": prompt,
        "input": prompt,
        "inputUrl": "",
        "url": "",
        "result": format!("Result for {}", prompt),
        "resultUrl": [],
        "createdAt": "2024-03-05T10:00:00.000Z",
        "updatedAt": "2024-03-05T10:00:00.000Z",
        "__v": 0
    })
}
