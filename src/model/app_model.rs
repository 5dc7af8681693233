//! Main application model with UI state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use super::media::Media;
use super::pagination::Paginator;
use super::types::{ActiveSection, ResponseEvent, UiState, ViewerState};

const NOTIFICATION_TTL_SECS: u64 = 5;
/// Rows moved by PageUp/PageDown.
pub const PAGE_JUMP: usize = 10;

/// UI-side state. The result list itself lives in the feed view-model.
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    paginator: Arc<Mutex<Paginator>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            ui_state: Arc::new(Mutex::new(UiState::default())),
            paginator: Arc::new(Mutex::new(Paginator::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    // ========================================================================
    // Search input
    // ========================================================================

    pub async fn update_search_query(&self, query: String) {
        let mut state = self.ui_state.lock().await;
        state.search_query = query;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
    }

    // ========================================================================
    // Result selection and infinite scrolling
    // ========================================================================

    pub async fn selected_index(&self) -> usize {
        self.ui_state.lock().await.selected
    }

    pub async fn move_selection_up(&self, step: usize) {
        let mut state = self.ui_state.lock().await;
        state.selected = state.selected.saturating_sub(step);
    }

    /// Moves the selection down within a list of `total` items and reports
    /// whether the next page should be requested.
    pub async fn move_selection_down(&self, step: usize, total: usize) -> bool {
        let selected = {
            let mut state = self.ui_state.lock().await;
            state.selected = (state.selected + step).min(total.saturating_sub(1));
            state.selected
        };

        let mut paginator = self.paginator.lock().await;
        let load_more = paginator.should_load_more(selected, total);
        if load_more {
            self.ui_state.lock().await.is_loading = true;
        }
        load_more
    }

    pub async fn set_loading(&self, loading: bool) {
        self.ui_state.lock().await.is_loading = loading;
    }

    /// Settle a load-more whose response was discarded and so produced no event.
    pub async fn finish_load_more(&self) {
        let mut paginator = self.paginator.lock().await;
        if paginator.is_loading() {
            tracing::debug!("Releasing load-more superseded by a newer request");
            paginator.cancel_loading();
        }
    }

    /// React to a feed response event: the list adapter side of the feed.
    pub async fn apply_response_event(&self, event: ResponseEvent) {
        self.paginator.lock().await.on_event(&event);

        let mut state = self.ui_state.lock().await;
        state.is_loading = false;
        match event {
            ResponseEvent::Refresh => {
                state.selected = 0;
                state.last_updated = Some(chrono::Local::now());
            }
            ResponseEvent::More { .. } => {
                state.last_updated = Some(chrono::Local::now());
            }
            ResponseEvent::Error => {
                state.error_message = Some("Network error occurred".to_string());
                state.error_timestamp = Some(Instant::now());
            }
        }
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn set_notice(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.notice = Some(message);
        state.notice_timestamp = Some(Instant::now());
    }

    pub async fn auto_clear_old_notifications(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > NOTIFICATION_TTL_SECS {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
        if let Some(timestamp) = state.notice_timestamp {
            if timestamp.elapsed().as_secs() > NOTIFICATION_TTL_SECS {
                state.notice = None;
                state.notice_timestamp = None;
            }
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub async fn open_viewer(&self, media: &Media) {
        let original = &media.images.original;
        let mut state = self.ui_state.lock().await;
        state.viewer = Some(ViewerState {
            title: media.display_title().to_string(),
            url: media.share_url().to_string(),
            width: original.width,
            height: original.height,
            aspect_ratio: original.aspect_ratio(),
            share_url: None,
        });
    }

    /// Report the outcome of a share: `copied` carries the clipboard result,
    /// already formatted for display when it failed.
    pub async fn record_share(&self, long_url: &str, short_url: String, copied: Result<(), String>) {
        match copied {
            Ok(()) => self.set_notice("URL copied to clipboard".to_string()).await,
            Err(message) => self.set_error(message).await,
        }
        self.set_viewer_share_url(long_url, short_url).await;
    }

    /// Records the shared link if the viewer for `long_url` is still open.
    pub async fn set_viewer_share_url(&self, long_url: &str, share_url: String) {
        let mut state = self.ui_state.lock().await;
        if let Some(viewer) = state.viewer.as_mut() {
            if viewer.url == long_url {
                viewer.share_url = Some(share_url);
            }
        }
    }

    pub async fn close_viewer(&self) {
        self.ui_state.lock().await.viewer = None;
    }

    pub async fn is_viewer_open(&self) -> bool {
        self.ui_state.lock().await.viewer.is_some()
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
