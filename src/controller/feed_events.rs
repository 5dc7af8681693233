//! Listener that folds feed response events into the UI state

use crate::model::ResponseEvent;
use super::AppController;

impl AppController {
    pub fn start_feed_event_listener(&self) {
        let mut events = self.feed.subscribe();
        let model = self.model.clone();
        let feed = self.feed.clone();
        tracing::info!("Starting feed event listener");

        tokio::spawn(async move {
            while events.changed().await.is_ok() {
                let latest = *events.borrow_and_update();
                let Some(event) = latest else {
                    continue;
                };

                let model_guard = model.lock().await;
                if model_guard.should_quit().await {
                    tracing::debug!("Feed event listener shutting down");
                    break;
                }

                let size = feed.len().await;
                match event {
                    ResponseEvent::Refresh => {
                        tracing::info!(size, "ResponseEvent::Refresh");
                    }
                    ResponseEvent::More { new_item_count } => {
                        tracing::info!(new_item_count, size, "ResponseEvent::More");
                    }
                    ResponseEvent::Error => {
                        tracing::warn!("ResponseEvent::Error");
                    }
                }
                model_guard.apply_response_event(event).await;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::Mutex;

    use super::*;
    use crate::model::test_support::{page, ScriptedSource};
    use crate::model::{AppModel, FeedViewModel, UiState};
    use crate::share::UrlShortener;

    fn controller_with(source: Arc<ScriptedSource>) -> AppController {
        let feed = FeedViewModel::new(source);
        let model = Arc::new(Mutex::new(AppModel::new()));
        let shortener = UrlShortener::new("http://127.0.0.1:9/api-create.php").unwrap();
        AppController::new(model, feed, shortener)
    }

    async fn wait_for_ui<F>(controller: &AppController, done: F) -> UiState
    where
        F: Fn(&UiState) -> bool,
    {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                let state = controller.model.lock().await.get_ui_state().await;
                if done(&state) {
                    return state;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("UI state never settled")
    }

    #[tokio::test]
    async fn listener_drives_loading_flag_and_selection() {
        let source = ScriptedSource::with(vec![page("a", 25), page("b", 25)]);
        let controller = controller_with(source.clone());
        controller.start_feed_event_listener();

        controller.show_trending().await;
        let state = wait_for_ui(&controller, |s| s.last_updated.is_some() && !s.is_loading).await;
        assert_eq!(state.selected, 0);
        assert_eq!(controller.feed.len().await, 25);

        let refreshed_at = state.last_updated;
        controller.move_down(24).await;
        let state = wait_for_ui(&controller, |s| s.last_updated != refreshed_at && !s.is_loading).await;
        assert_eq!(state.selected, 24);
        assert_eq!(controller.feed.len().await, 50);

        // The script is exhausted, so the next page fails.
        controller.move_down(25).await;
        let state = wait_for_ui(&controller, |s| s.error_message.is_some() && !s.is_loading).await;
        assert_eq!(state.error_message.as_deref(), Some("Network error occurred"));
        assert_eq!(state.selected, 49);
        assert_eq!(controller.feed.len().await, 50);

        // Error released the paginator, so scrolling asks again.
        controller.model.lock().await.clear_error().await;
        controller.move_down(1).await;
        wait_for_ui(&controller, |s| s.error_message.is_some()).await;

        let offsets: Vec<usize> = source.calls().into_iter().map(|(_, offset)| offset).collect();
        assert_eq!(offsets, vec![0, 25, 50, 50]);
    }

    #[tokio::test]
    async fn refresh_while_loading_more_keeps_pagination_alive() {
        let source = ScriptedSource::with(vec![page("a", 25), page("c", 25), page("d", 25)]);
        let controller = controller_with(source.clone());
        controller.start_feed_event_listener();

        controller.show_trending().await;
        let state = wait_for_ui(&controller, |s| s.last_updated.is_some() && !s.is_loading).await;

        // Raise the paginator's flag without a request, as if a page were in flight.
        assert!(controller.model.lock().await.move_selection_down(24, 25).await);
        let refreshed_at = state.last_updated;
        controller.request_refresh().await;
        let state = wait_for_ui(&controller, |s| s.last_updated != refreshed_at && !s.is_loading).await;
        assert_eq!(state.selected, 0);

        controller.move_down(24).await;
        let refreshed_at = state.last_updated;
        wait_for_ui(&controller, |s| s.last_updated != refreshed_at && !s.is_loading).await;
        assert_eq!(controller.feed.len().await, 50);
    }
}
