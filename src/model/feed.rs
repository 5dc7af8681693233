//! Feed view-model: the result list, the current mode and the last response event
//!
//! All list mutation and event publication happens under one lock, after the
//! network call has returned, so observers never see a half-applied page.
//! Requests are tagged with a generation number; `set_mode` and `refresh`
//! start a new generation and any response from an older one is dropped.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use super::giphy_client::{FetchOutcome, MediaSource};
use super::media::Media;
use super::types::{AppMode, ResponseEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RequestKind {
    Refresh,
    More,
}

struct FeedState {
    mode: AppMode,
    items: Vec<Media>,
    last_event: Option<ResponseEvent>,
    generation: u64,
}

/// Read-only copy of the feed for rendering
#[derive(Clone, Debug, Default)]
pub struct FeedSnapshot {
    pub mode: AppMode,
    pub items: Vec<Media>,
    pub last_event: Option<ResponseEvent>,
}

#[derive(Clone)]
pub struct FeedViewModel {
    source: Arc<dyn MediaSource>,
    state: Arc<Mutex<FeedState>>,
    events: Arc<watch::Sender<Option<ResponseEvent>>>,
}

impl FeedViewModel {
    pub fn new(source: Arc<dyn MediaSource>) -> Self {
        let (events, _) = watch::channel(None);
        Self {
            source,
            state: Arc::new(Mutex::new(FeedState {
                mode: AppMode::default(),
                items: Vec::new(),
                last_event: None,
                generation: 0,
            })),
            events: Arc::new(events),
        }
    }

    /// Subscribe to response events.
    ///
    /// Only the latest event is retained. A new receiver sees the current
    /// value immediately, and a slow receiver may skip intermediate events.
    pub fn subscribe(&self) -> watch::Receiver<Option<ResponseEvent>> {
        self.events.subscribe()
    }

    pub async fn set_mode(&self, mode: AppMode) {
        let mut state = self.state.lock().await;
        tracing::debug!(mode = ?mode, "Feed mode changed");
        state.mode = mode;
        state.generation += 1;
    }

    pub async fn mode(&self) -> AppMode {
        self.state.lock().await.mode.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.items.len()
    }

    pub async fn item(&self, index: usize) -> Option<Media> {
        self.state.lock().await.items.get(index).cloned()
    }

    pub async fn snapshot(&self) -> FeedSnapshot {
        let state = self.state.lock().await;
        FeedSnapshot {
            mode: state.mode.clone(),
            items: state.items.clone(),
            last_event: state.last_event,
        }
    }

    /// Load the first page for the current mode, replacing the list on success.
    #[cfg(test)]
    pub async fn refresh(&self) -> Option<ResponseEvent> {
        self.request(RequestKind::Refresh).await
    }

    /// Load the first page for the current mode, replacing the list on success,
    /// then run `on_complete` once the outcome is settled.
    pub async fn refresh_then<F>(&self, on_complete: F) -> Option<ResponseEvent>
    where
        F: FnOnce() + Send,
    {
        let event = self.request(RequestKind::Refresh).await;
        on_complete();
        event
    }

    /// Load the page that follows the items already in the list.
    #[cfg(test)]
    pub async fn load_more(&self) -> Option<ResponseEvent> {
        self.request(RequestKind::More).await
    }

    /// Load the page that follows the items already in the list, then run
    /// `on_complete`. It runs even when the response is discarded.
    pub async fn load_more_then<F>(&self, on_complete: F) -> Option<ResponseEvent>
    where
        F: FnOnce() + Send,
    {
        let event = self.request(RequestKind::More).await;
        on_complete();
        event
    }

    /// Returns the published event, or `None` if the response was stale.
    async fn request(&self, kind: RequestKind) -> Option<ResponseEvent> {
        let (mode, offset, generation) = {
            let mut state = self.state.lock().await;
            if kind == RequestKind::Refresh {
                state.generation += 1;
            }
            let offset = match kind {
                RequestKind::Refresh => 0,
                RequestKind::More => state.items.len(),
            };
            (state.mode.clone(), offset, state.generation)
        };

        let outcome = self.source.fetch(&mode, offset).await;

        let mut state = self.state.lock().await;
        let list_moved = kind == RequestKind::More && state.items.len() != offset;
        if state.generation != generation || list_moved {
            tracing::debug!(
                ?kind,
                offset,
                request_generation = generation,
                current_generation = state.generation,
                "Discarding stale response"
            );
            return None;
        }

        let event = match (kind, outcome) {
            (RequestKind::Refresh, FetchOutcome::Items(items)) => {
                state.items.clear();
                state.items.extend(items);
                tracing::debug!(size = state.items.len(), "Feed reset");
                ResponseEvent::Refresh
            }
            (RequestKind::Refresh, FetchOutcome::Empty) => {
                tracing::warn!(mode = ?mode, "Refresh returned no items");
                ResponseEvent::Error
            }
            (RequestKind::More, FetchOutcome::Items(items)) => {
                let new_item_count = items.len();
                state.items.extend(items);
                tracing::debug!(size = state.items.len(), new_item_count, "Feed extended");
                ResponseEvent::More { new_item_count }
            }
            (RequestKind::More, FetchOutcome::Empty) => {
                tracing::debug!(size = state.items.len(), "Load more returned no items");
                ResponseEvent::More { new_item_count: 0 }
            }
            (_, FetchOutcome::Failed(e)) => {
                tracing::error!(?kind, offset, error = %e, "Feed request failed");
                ResponseEvent::Error
            }
        };

        state.last_event = Some(event);
        self.events.send_replace(Some(event));
        Some(event)
    }
}
