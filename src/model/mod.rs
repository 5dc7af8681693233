//! Model module - Application state and data types
//!
//! - `types`: AppMode, ResponseEvent and UI state types
//! - `media`: Giphy media records
//! - `giphy_client`: Giphy API client and the `MediaSource` seam
//! - `feed`: the feed view-model (result list, mode, last event)
//! - `pagination`: infinite-scroll trigger
//! - `app_model`: UI state with state management methods

mod types;
mod media;
mod giphy_client;
mod feed;
mod pagination;
mod app_model;
#[cfg(test)]
pub(crate) mod test_support;

pub use types::{ActiveSection, AppMode, ResponseEvent, UiState, ViewerState};

pub use giphy_client::GiphyClient;

pub use feed::{FeedSnapshot, FeedViewModel};

pub use app_model::{AppModel, PAGE_JUMP};
