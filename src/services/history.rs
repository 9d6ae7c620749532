//! History endpoints.

use tracing::info;

use serde_json::Value;

use crate::api::{ApiClient, ApiResponse, RequestConfig};
use crate::error::ApiError;
use crate::models::{DeleteResponse, HistoryItem};

pub const HISTORY_ENDPOINT: &str = "/history";

/// Lists, fetches and deletes stored generations.
#[derive(Debug, Clone)]
pub struct HistoryService {
    client: ApiClient,
}

impl HistoryService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn item_endpoint(id: &str) -> Result<String, ApiError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ApiError::validation("Project id is required"));
        }
        Ok(format!("{}/{}", HISTORY_ENDPOINT, urlencoding::encode(id)))
    }

    /// `GET /history`: every stored generation, newest first as the server sends them.
    pub async fn get_history(&self) -> Result<ApiResponse<Vec<HistoryItem>>, ApiError> {
        let response = self
            .client
            .get::<Vec<HistoryItem>>(HISTORY_ENDPOINT, RequestConfig::new())
            .await?;
        info!(count = response.data.len(), "Loaded history");
        Ok(response)
    }

    /// `GET /history/{id}`.
    pub async fn get_project_details(&self, id: &str) -> Result<ApiResponse<HistoryItem>, ApiError> {
        let endpoint = Self::item_endpoint(id)?;
        self.client.get(&endpoint, RequestConfig::new()).await
    }

    /// `DELETE /history/{id}`. Any 2xx reply is accepted, including an empty
    /// one. Removing the item from a local list is up to the caller.
    pub async fn delete_history_item(
        &self,
        id: &str,
    ) -> Result<ApiResponse<DeleteResponse>, ApiError> {
        let endpoint = Self::item_endpoint(id)?;
        let response = self
            .client
            .delete::<Value>(&endpoint, RequestConfig::new())
            .await?;
        let data = DeleteResponse::from_body(response.data);
        info!(id, status = response.status, rejected = data.is_rejected(), "Deleted history item");
        Ok(ApiResponse::new(data, response.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
    use crate::error::ApiErrorKind;
    use crate::traits::{Method, Response};
    use bytes::Bytes;
    use serde_json::json;
    use std::sync::Arc;

    fn service(http: &MockHttpClient) -> HistoryService {
        let client = ApiClient::new(Arc::new(http.clone()), Arc::new(InMemoryCredentials::new()))
            .with_base_url("http://api.test/");
        HistoryService::new(client)
    }

    #[tokio::test]
    async fn test_get_history() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api.test/history",
            MockResponse::Success(Response::json_body(
                200,
                &json!([
                    {"_id": "a", "type": "key-points", "input": "one"},
                    {"_id": "b", "type": "concept-map", "inputUrl": "https://x"}
                ]),
            )),
        );

        let response = service(&http).get_history().await.unwrap();
        let ids: Vec<&str> = response.data.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(http.get_requests()[0].method, Method::Get);
    }

    #[tokio::test]
    async fn test_get_project_details_encodes_id() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Success(Response::json_body(
            200,
            &json!({"_id": "a b", "type": "key-points"}),
        )));

        let response = service(&http).get_project_details("a b").await.unwrap();
        assert_eq!(response.data.id, "a b");
        assert_eq!(http.get_requests()[0].url, "http://api.test/history/a%20b");
    }

    #[tokio::test]
    async fn test_delete_history_item() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api.test/history/abc",
            MockResponse::Success(Response::json_body(200, &json!({"success": true}))),
        );

        let response = service(&http).delete_history_item("abc").await.unwrap();
        assert_eq!(response.data, DeleteResponse::confirmed());
        let recorded = &http.get_requests()[0];
        assert_eq!(recorded.method, Method::Delete);
        assert_eq!(recorded.body, None);
    }

    #[tokio::test]
    async fn test_delete_accepts_bodiless_and_plain_replies() {
        let replies = [
            Response::new(204, Bytes::new()),
            Response::json_body(200, &json!({})),
            Response::json_body(200, &json!({"message": "deleted"})),
        ];
        for reply in replies {
            let http = MockHttpClient::new();
            http.set_default_response(MockResponse::Success(reply));

            let response = service(&http).delete_history_item("a").await.unwrap();
            assert!(!response.data.is_rejected());
        }
    }

    #[tokio::test]
    async fn test_delete_reports_explicit_refusal() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Success(Response::json_body(
            200,
            &json!({"success": false}),
        )));

        let response = service(&http).delete_history_item("a").await.unwrap();
        assert!(response.data.is_rejected());
    }

    #[tokio::test]
    async fn test_blank_id_is_rejected() {
        let http = MockHttpClient::new();
        let err = service(&http).get_project_details(" ").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(http.request_count(), 0);
    }
}
