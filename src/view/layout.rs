//! Top bar rendering (search input, current mode)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, AppMode, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, mode: &AppMode) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(30), // Mode
        ])
        .split(area);

    let focused = ui_state.active_section == ActiveSection::Search;
    let search_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_query.is_empty() && !focused {
        "Press / to search GIFs...".to_string()
    } else if focused {
        format!("{}_", ui_state.search_query)
    } else {
        ui_state.search_query.clone()
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, chunks[0]);

    let mode_color = match mode {
        AppMode::Trending => Color::Magenta,
        AppMode::Search { .. } => Color::Cyan,
    };
    let mode_widget = Paragraph::new(mode.label())
        .style(Style::default().fg(mode_color))
        .block(Block::default().borders(Borders::ALL).title(" Mode "));
    frame.render_widget(mode_widget, chunks[1]);
}
