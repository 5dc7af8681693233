//! Giphy API client wrapper

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::config::{AppConfig, PAGE_SIZE};
use super::media::{ListMediaResponse, Media};
use super::types::AppMode;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum GiphyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response carried no data")]
    MissingData,
}

/// Result of a single page request
#[derive(Debug)]
pub enum FetchOutcome {
    Items(Vec<Media>),
    Empty,
    Failed(GiphyError),
}

impl FetchOutcome {
    fn from_items(items: Vec<Media>) -> Self {
        if items.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Items(items)
        }
    }
}

/// Anything that can produce a page of media for an [`AppMode`].
#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn fetch(&self, mode: &AppMode, offset: usize) -> FetchOutcome;
}

/// HTTP client for the trending and search endpoints
#[derive(Clone)]
pub struct GiphyClient {
    http: Client,
    api_base: String,
    api_key: String,
    rating: String,
}

impl GiphyClient {
    pub fn new(config: &AppConfig) -> Result<Self, GiphyError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_http_client(http, config))
    }

    pub fn with_http_client(http: Client, config: &AppConfig) -> Self {
        Self {
            http,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            rating: config.rating.clone(),
        }
    }

    fn endpoint(&self, mode: &AppMode) -> String {
        match mode {
            AppMode::Trending => format!("{}/v1/gifs/trending", self.api_base),
            AppMode::Search { .. } => format!("{}/v1/gifs/search", self.api_base),
        }
    }

    fn query_params(&self, mode: &AppMode, offset: usize) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("limit", PAGE_SIZE.to_string()),
            ("offset", offset.to_string()),
            ("rating", self.rating.clone()),
        ];
        if let AppMode::Search { query } = mode {
            params.push(("q", query.clone()));
            params.push(("lang", "en".to_string()));
        }
        params
    }

    pub async fn fetch_page(&self, mode: &AppMode, offset: usize) -> Result<Vec<Media>, GiphyError> {
        match mode {
            AppMode::Trending => {
                crate::log_api_request!("trending", offset, limit = PAGE_SIZE);
            }
            AppMode::Search { query } => {
                crate::log_api_request!("search", query = %query, offset, limit = PAGE_SIZE);
            }
        }

        let response = self
            .http
            .get(self.endpoint(mode))
            .query(&self.query_params(mode, offset))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GiphyError::Status(status));
        }

        let body = response.text().await?;
        let parsed: ListMediaResponse = serde_json::from_str(&body)?;

        if let Some(pagination) = &parsed.pagination {
            tracing::trace!(
                total_count = ?pagination.total_count,
                offset = ?pagination.offset,
                "Giphy pagination"
            );
        }

        parsed.data.ok_or(GiphyError::MissingData)
    }
}

#[async_trait]
impl MediaSource for GiphyClient {
    async fn fetch(&self, mode: &AppMode, offset: usize) -> FetchOutcome {
        let result = self.fetch_page(mode, offset).await;
        crate::log_api_result!(if matches!(mode, AppMode::Trending) { "trending" } else { "search" }, result);

        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), offset, "Fetched page");
                FetchOutcome::from_items(items)
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> GiphyClient {
        let config = AppConfig {
            api_key: "test-key".to_string(),
            api_base: server.url(),
            rating: "g".to_string(),
            shortener_endpoint: String::new(),
        };
        GiphyClient::new(&config).unwrap()
    }

    fn page_body(ids: &[&str]) -> String {
        let data: Vec<String> = ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{"id":"{id}","title":"gif {id}","url":"https://giphy.com/gifs/{id}","images":{{"original":{{"url":"https://media.giphy.com/{id}.gif","width":"480","height":"270"}}}}}}"#
                )
            })
            .collect();
        format!(
            r#"{{"data":[{}],"pagination":{{"total_count":1000,"count":{},"offset":0}},"meta":{{"status":200,"msg":"OK"}}}}"#,
            data.join(","),
            ids.len()
        )
    }

    #[tokio::test]
    async fn trending_request_sends_page_size_offset_and_rating() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/gifs/trending")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_key".into(), "test-key".into()),
                Matcher::UrlEncoded("limit".into(), "25".into()),
                Matcher::UrlEncoded("offset".into(), "50".into()),
                Matcher::UrlEncoded("rating".into(), "g".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body(&["a", "b"]))
            .create_async()
            .await;

        let client = client_for(&server);
        let outcome = client.fetch(&AppMode::Trending, 50).await;

        mock.assert_async().await;
        match outcome {
            FetchOutcome::Items(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].id, "a");
                assert_eq!(items[1].images.original.height, 270);
            }
            other => panic!("expected items, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_request_sends_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/gifs/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "funny cats".into()),
                Matcher::UrlEncoded("offset".into(), "0".into()),
            ]))
            .with_status(200)
            .with_body(page_body(&["c"]))
            .create_async()
            .await;

        let client = client_for(&server);
        let outcome = client.fetch(&AppMode::search("funny cats"), 0).await;

        mock.assert_async().await;
        assert!(matches!(outcome, FetchOutcome::Items(ref items) if items.len() == 1));
    }

    #[tokio::test]
    async fn empty_data_is_empty_outcome() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/gifs/trending")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data":[],"meta":{"status":200}}"#)
            .create_async()
            .await;

        let outcome = client_for(&server).fetch(&AppMode::Trending, 0).await;
        assert!(matches!(outcome, FetchOutcome::Empty));
    }

    #[tokio::test]
    async fn server_error_and_missing_data_are_failures() {
        let mut server = Server::new_async().await;
        let _error = server
            .mock("GET", "/v1/gifs/trending")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/v1/gifs/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"meta":{"status":200}}"#)
            .create_async()
            .await;

        let client = client_for(&server);

        let outcome = client.fetch(&AppMode::Trending, 0).await;
        assert!(matches!(
            outcome,
            FetchOutcome::Failed(GiphyError::Status(code)) if code == StatusCode::INTERNAL_SERVER_ERROR
        ));

        let outcome = client.fetch(&AppMode::search("x"), 0).await;
        assert!(matches!(outcome, FetchOutcome::Failed(GiphyError::MissingData)));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/gifs/trending")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let outcome = client_for(&server).fetch(&AppMode::Trending, 0).await;
        assert!(matches!(outcome, FetchOutcome::Failed(GiphyError::Decode(_))));
    }
}
