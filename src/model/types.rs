//! Core type definitions for the application

use std::fmt;
use std::time::Instant;

/// Which request the feed issues: the trending list or a search.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Trending,
    Search { query: String },
}

impl AppMode {
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search { query: query.into() }
    }

    pub fn label(&self) -> String {
        match self {
            AppMode::Trending => "Trending".to_string(),
            AppMode::Search { query } => format!("Search: {}", query),
        }
    }
}

/// Outcome of the last completed feed request.
///
/// Only the most recent value is kept; a new completion overwrites it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseEvent {
    /// The list was replaced by a fresh first page.
    Refresh,
    /// `new_item_count` items were appended to the end of the list.
    More { new_item_count: usize },
    Error,
}

impl fmt::Display for ResponseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseEvent::Refresh => write!(f, "Refreshed"),
            ResponseEvent::More { new_item_count } => write!(f, "+{} loaded", new_item_count),
            ResponseEvent::Error => write!(f, "Error"),
        }
    }
}

/// Which section of the UI is currently focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }
}

/// The item shown in the full-screen viewer overlay
#[derive(Clone, Debug)]
pub struct ViewerState {
    pub title: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: Option<f32>,
    /// Shortened link once it has been copied, `None` while in progress.
    pub share_url: Option<String>,
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    pub selected: usize,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub notice: Option<String>,
    pub notice_timestamp: Option<Instant>,
    pub viewer: Option<ViewerState>,
    pub show_help_popup: bool,
    pub is_loading: bool,
    pub last_updated: Option<chrono::DateTime<chrono::Local>>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Results,
            search_query: String::new(),
            selected: 0,
            error_message: None,
            error_timestamp: None,
            notice: None,
            notice_timestamp: None,
            viewer: None,
            show_help_popup: false,
            is_loading: false,
            last_updated: None,
        }
    }
}
