//! Mode switching and feed requests

use std::time::Instant;

use crate::model::{ActiveSection, AppMode};
use super::AppController;

impl AppController {
    pub async fn show_trending(&self) {
        tracing::debug!("Switching to trending");
        self.feed.set_mode(AppMode::Trending).await;
        self.request_refresh().await;
    }

    pub async fn perform_search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        tracing::debug!(query, "Performing search");
        self.feed.set_mode(AppMode::search(query)).await;

        {
            let model = self.model.lock().await;
            model.set_active_section(ActiveSection::Results).await;
        }
        self.request_refresh().await;
    }

    /// Start a refresh of the current mode in the background.
    pub async fn request_refresh(&self) {
        self.model.lock().await.set_loading(true).await;

        let feed = self.feed.clone();
        tokio::spawn(async move {
            let mode = feed.mode().await;
            tracing::debug!(?mode, "Refreshing feed");
            let started = Instant::now();
            let event = feed
                .refresh_then(move || {
                    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "Refresh finished");
                })
                .await;
            if event.is_none() {
                tracing::debug!("Refresh superseded by a newer request");
            }
        });
    }

    /// Fetch the next page in the background. The paginator's loading flag
    /// has already been raised by the caller.
    pub fn request_more(&self) {
        let feed = self.feed.clone();
        let model = self.model.clone();
        tokio::spawn(async move {
            let started = Instant::now();
            let event = feed
                .load_more_then(move || {
                    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "Load more finished");
                })
                .await;
            if event.is_none() {
                model.lock().await.finish_load_more().await;
            }
        });
    }

    pub async fn move_down(&self, step: usize) {
        let total = self.feed.len().await;
        let load_more = self.model.lock().await.move_selection_down(step, total).await;
        if load_more {
            tracing::debug!(total, "Near end of list, loading more");
            self.request_more();
        }
    }

    pub async fn move_up(&self, step: usize) {
        self.model.lock().await.move_selection_up(step).await;
    }
}
