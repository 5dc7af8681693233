//! Controller module - Application logic and event handling
//!
//! - `input`: Key event handling
//! - `navigation`: Mode switching, refresh and load-more requests
//! - `sharing`: Viewer overlay and shortened-URL clipboard sharing
//! - `feed_events`: Feed response event listener

mod input;
mod navigation;
mod sharing;
mod feed_events;

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::model::{AppModel, FeedViewModel};
use crate::share::UrlShortener;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) feed: FeedViewModel,
    pub(crate) shortener: UrlShortener,
    share_cancel: Arc<Mutex<Option<CancellationToken>>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, feed: FeedViewModel, shortener: UrlShortener) -> Self {
        Self {
            model,
            feed,
            shortener,
            share_cancel: Arc::new(Mutex::new(None)),
        }
    }

    /// Cancel any share in flight and hand out the token for the next one.
    pub(crate) async fn replace_share_token(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.share_cancel.lock().await.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        let error_str = error.to_string();

        if error_str.contains("clipboard") || error_str.contains("Clipboard") {
            "Clipboard not available.".to_string()
        } else if error_str.contains("401") || error_str.contains("403") {
            "Giphy rejected the API key. Check GIPHY_API_KEY.".to_string()
        } else if error_str.contains("429") {
            "Rate limited. Please wait a moment.".to_string()
        } else {
            format!("Error: {}", error_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_maps_known_failures() {
        let rate_limited = anyhow::anyhow!("unexpected status 429 Too Many Requests");
        assert_eq!(AppController::format_error(&rate_limited), "Rate limited. Please wait a moment.");

        let other = anyhow::anyhow!("boom");
        assert_eq!(AppController::format_error(&other), "Error: boom");
    }
}
