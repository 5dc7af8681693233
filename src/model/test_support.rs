//! Scripted media sources shared by the model and controller tests

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::giphy_client::{FetchOutcome, GiphyError, MediaSource};
use super::media::Media;
use super::types::AppMode;

pub(crate) fn media(id: &str) -> Media {
    Media {
        id: id.to_string(),
        title: format!("gif {}", id),
        url: format!("https://giphy.com/gifs/{}", id),
        images: Default::default(),
    }
}

pub(crate) fn page(prefix: &str, count: usize) -> FetchOutcome {
    if count == 0 {
        return FetchOutcome::Empty;
    }
    FetchOutcome::Items((0..count).map(|i| media(&format!("{}{}", prefix, i))).collect())
}

/// Replays queued outcomes and records every (mode, offset) it was asked for.
/// Once the queue is drained every fetch fails.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    outcomes: std::sync::Mutex<VecDeque<FetchOutcome>>,
    calls: std::sync::Mutex<Vec<(AppMode, usize)>>,
}

impl ScriptedSource {
    pub(crate) fn with(outcomes: Vec<FetchOutcome>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: std::sync::Mutex::new(outcomes.into()),
            calls: Default::default(),
        })
    }

    pub(crate) fn calls(&self) -> Vec<(AppMode, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaSource for ScriptedSource {
    async fn fetch(&self, mode: &AppMode, offset: usize) -> FetchOutcome {
        self.calls.lock().unwrap().push((mode.clone(), offset));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(FetchOutcome::Failed(GiphyError::MissingData))
    }
}

/// Holds each fetch until the test releases it.
pub(crate) struct GatedSource {
    pub(crate) inner: Arc<ScriptedSource>,
    pub(crate) started: Notify,
    pub(crate) release: Notify,
}

impl GatedSource {
    pub(crate) fn new(inner: Arc<ScriptedSource>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            started: Notify::new(),
            release: Notify::new(),
        })
    }
}

#[async_trait]
impl MediaSource for GatedSource {
    async fn fetch(&self, mode: &AppMode, offset: usize) -> FetchOutcome {
        self.started.notify_one();
        self.release.notified().await;
        self.inner.fetch(mode, offset).await
    }
}
