//! Overlay rendering (notifications, viewer, help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{UiState, ViewerState};
use super::utils::{centered_rect, format_dimensions};

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        render_toast(frame, error_msg, " Error (Esc to dismiss) ", Color::Red);
    }
}

pub fn render_notice(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref notice) = ui_state.notice {
        render_toast(frame, notice, " Info ", Color::Green);
    }
}

fn render_toast(frame: &mut Frame, message: &str, title: &str, color: Color) {
    let area = frame.area();

    let popup_width = 52.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4).max(1) as usize;
    let line_count = message.chars().count().div_ceil(inner_width).max(1) as u16;

    // Bottom of the screen, above the status bar
    let popup_height = 2 + line_count;
    let mut popup_area = centered_rect(area, popup_width, popup_height);
    popup_area.y = area.height.saturating_sub(popup_area.height + 3);

    frame.render_widget(Clear, popup_area);

    let toast = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title.to_string())
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(toast, popup_area);
}

pub fn render_viewer(frame: &mut Frame, viewer: &ViewerState) {
    let area = frame.area();
    let popup_area = centered_rect(area, area.width.saturating_sub(8), area.height.saturating_sub(6));

    frame.render_widget(Clear, popup_area);

    let label = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let aspect = viewer
        .aspect_ratio
        .map(|ratio| format!("{:.2}", ratio))
        .unwrap_or_else(|| "unknown".to_string());
    let share = viewer
        .share_url
        .clone()
        .unwrap_or_else(|| "shortening...".to_string());

    let lines = vec![
        Line::from(Span::styled(
            viewer.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Size:    ", label), Span::raw(format_dimensions(viewer.width, viewer.height))]),
        Line::from(vec![Span::styled("Aspect:  ", label), Span::raw(aspect)]),
        Line::from(vec![Span::styled("URL:     ", label), Span::raw(viewer.url.clone())]),
        Line::from(vec![Span::styled("Share:   ", label), Span::styled(share, Style::default().fg(Color::Cyan))]),
    ];

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" GIF (c: copy link, Esc: close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(widget, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let keybindings = [
        ("", "── Browse ──"),
        ("↑/↓ j/k", "Move selection"),
        ("PgUp/PgDn", "Move by a page"),
        ("Enter", "Open GIF and copy short link"),
        ("C", "Copy short link of selection"),
        ("", ""),
        ("", "── Feed ──"),
        ("T", "Trending"),
        ("/ or S", "Search"),
        ("R", "Refresh"),
        ("", ""),
        ("", "── General ──"),
        ("Tab", "Switch focus"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_height = keybindings.len() as u16 + 2;
    let popup_area = centered_rect(area, 56, popup_height);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
