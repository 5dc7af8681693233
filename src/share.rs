//! Sharing helpers: TinyURL shortening and clipboard access

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio_util::sync::CancellationToken;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("shortener returned an empty body")]
    EmptyBody,
}

/// Client for the TinyURL `api-create` endpoint
#[derive(Clone)]
pub struct UrlShortener {
    http: Client,
    endpoint: String,
}

impl UrlShortener {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ShortenError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// `GET <endpoint>?url=<long_url>`; the body is the short link.
    pub async fn shorten_url(&self, long_url: &str) -> Result<String, ShortenError> {
        crate::log_api_request!("shorten", long_url);

        let response = self
            .http
            .get(self.endpoint.as_str())
            .query(&[("url", long_url)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::Status(status));
        }

        let body = response.text().await?;
        let short = body.trim();
        if short.is_empty() {
            return Err(ShortenError::EmptyBody);
        }
        Ok(short.to_string())
    }

    /// Shorten `long_url`, handing back the input unchanged if anything fails.
    pub async fn shorten(&self, long_url: &str) -> String {
        let result = self.shorten_url(long_url).await;
        crate::log_api_result!("shorten", result);
        result.unwrap_or_else(|_| long_url.to_string())
    }

    /// [`shorten`](Self::shorten) that gives up when `cancel` fires; `None` means cancelled.
    pub async fn shorten_cancellable(&self, long_url: &str, cancel: CancellationToken) -> Option<String> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(long_url, "URL shortening cancelled");
                None
            }
            short = self.shorten(long_url) => Some(short),
        }
    }
}

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    tracing::debug!(text, "Copied to clipboard");
    Ok(())
}
