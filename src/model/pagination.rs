//! Infinite-scroll trigger for the result list

use crate::config::LOAD_MORE_THRESHOLD;
use super::types::ResponseEvent;

/// Decides when the list is scrolled far enough to request the next page.
///
/// Stays disabled until the first `Refresh`, and only lets one load-more
/// through until that request settles. A `Refresh` also settles it, since it
/// supersedes any page still in flight.
#[derive(Clone, Debug)]
pub struct Paginator {
    threshold: usize,
    enabled: bool,
    loading: bool,
}

impl Paginator {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            enabled: false,
            loading: false,
        }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Pagination is unbounded; the API's own end-of-results marker is ignored.
    pub fn has_loaded_all_items(&self) -> bool {
        false
    }

    /// Returns true (and marks a load in progress) when `last_visible` is
    /// within the threshold of the end of a list of `total` items.
    pub fn should_load_more(&mut self, last_visible: usize, total: usize) -> bool {
        if !self.enabled || self.loading || self.has_loaded_all_items() {
            return false;
        }
        if last_visible + self.threshold < total {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn on_event(&mut self, event: &ResponseEvent) {
        match event {
            ResponseEvent::Refresh => {
                if !self.enabled {
                    tracing::debug!("Infinite scrolling enabled");
                }
                self.enabled = true;
                self.loading = false;
            }
            ResponseEvent::More { .. } | ResponseEvent::Error => {
                self.loading = false;
            }
        }
    }

    /// Release the loading flag for a load-more that ended without an event.
    pub fn cancel_loading(&mut self) {
        self.loading = false;
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(LOAD_MORE_THRESHOLD)
    }
}
