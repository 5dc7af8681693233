//! View module - UI rendering
//!
//! - `utils`: Shared helpers (truncation, scrollable lists)
//! - `layout`: Top bar (search input and mode)
//! - `content`: Result list
//! - `status`: Bottom status bar
//! - `overlays`: Notifications, viewer and help popup

mod utils;
mod layout;
mod content;
mod status;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{FeedSnapshot, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, feed: &FeedSnapshot, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + mode
                Constraint::Min(0),    // Results
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state, &feed.mode);
        content::render_results(frame, chunks[1], ui_state, feed);
        status::render_status_bar(frame, chunks[2], ui_state, feed);

        if let Some(viewer) = &ui_state.viewer {
            overlays::render_viewer(frame, viewer);
        }

        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        } else if ui_state.notice.is_some() {
            overlays::render_notice(frame, ui_state);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
