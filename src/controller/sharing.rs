//! Full-screen viewer and clipboard sharing

use crate::share::copy_to_clipboard;
use super::AppController;

impl AppController {
    /// Open the viewer for the selected item and share its link.
    pub async fn open_selected(&self) {
        let selected = self.model.lock().await.selected_index().await;
        let Some(media) = self.feed.item(selected).await else {
            return;
        };

        tracing::debug!(id = %media.id, "Opening viewer");
        self.model.lock().await.open_viewer(&media).await;
        self.share_url(media.share_url().to_string()).await;
    }

    pub async fn share_selected(&self) {
        let selected = self.model.lock().await.selected_index().await;
        if let Some(media) = self.feed.item(selected).await {
            self.share_url(media.share_url().to_string()).await;
        }
    }

    /// Shorten `long_url` off the input path and copy the result to the clipboard.
    /// Starting a new share cancels the previous one.
    pub async fn share_url(&self, long_url: String) {
        if long_url.is_empty() {
            return;
        }

        let cancel = self.replace_share_token().await;
        let controller = self.clone();
        tokio::spawn(async move {
            let Some(short) = controller.shortener.shorten_cancellable(&long_url, cancel).await else {
                return;
            };

            // Clipboard access is synchronous; keep it off the model lock.
            let copied = match copy_to_clipboard(&short) {
                Ok(()) => {
                    tracing::info!(url = %short, "Share URL copied");
                    Ok(())
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Clipboard copy failed");
                    Err(Self::format_error(&e))
                }
            };

            controller.model.lock().await.record_share(&long_url, short, copied).await;
        });
    }
}
