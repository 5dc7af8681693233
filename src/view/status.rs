//! Status bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{FeedSnapshot, ResponseEvent, UiState};

pub fn render_status_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, feed: &FeedSnapshot) {
    let (event_text, event_color) = match feed.last_event {
        None => ("Idle".to_string(), Color::DarkGray),
        Some(ResponseEvent::Error) => ("Error".to_string(), Color::Red),
        Some(event) => (event.to_string(), Color::Green),
    };

    let updated = ui_state
        .last_updated
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    let position = if feed.items.is_empty() {
        "0 / 0".to_string()
    } else {
        format!("{} / {}", ui_state.selected + 1, feed.items.len())
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", position), Style::default().fg(Color::White)),
        Span::raw("| "),
        Span::styled(event_text, Style::default().fg(event_color)),
        Span::raw(format!(" | Updated {} ", updated)),
    ];
    if ui_state.is_loading {
        spans.push(Span::styled("| Loading... ", Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Status ")
            .title_bottom(Line::from(" h: help | q: quit ").right_aligned()),
    );
    frame.render_widget(status, area);
}
