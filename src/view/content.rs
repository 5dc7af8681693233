//! Result list rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, FeedSnapshot, UiState};
use super::utils::{calculate_num_width, format_dimensions, render_scrollable_list, truncate_string};

pub fn render_results(frame: &mut Frame, area: Rect, ui_state: &UiState, feed: &FeedSnapshot) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let title = format!(" {} ", feed.mode.label());

    if feed.items.is_empty() {
        let text = if ui_state.is_loading {
            "Loading..."
        } else {
            "Nothing here yet\n\nPress r to refresh, t for trending, / to search"
        };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(if ui_state.is_loading { Color::Yellow } else { Color::DarkGray }))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(placeholder, area);
        return;
    }

    let num_width = calculate_num_width(feed.items.len());
    let dims_width = 9;
    // borders(2) + leading space + num + separators
    let title_width = (area.width as usize).saturating_sub(2 + 1 + num_width + 3 + 3 + dims_width);

    let mut items: Vec<ListItem> = feed
        .items
        .iter()
        .enumerate()
        .map(|(i, media)| {
            let preview = &media.images.fixed_width_downsampled;
            let selected = i == ui_state.selected;
            let style = if selected && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:>width$}", i + 1, width = num_width), Style::default().fg(Color::DarkGray)),
                Span::raw("   "),
                Span::styled(truncate_string(media.display_title(), title_width), style),
                Span::raw("   "),
                Span::styled(
                    format!("{:>width$}", format_dimensions(preview.width, preview.height), width = dims_width),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    if ui_state.is_loading {
        items.push(ListItem::new(Span::styled(
            " Loading more...",
            Style::default().fg(Color::Yellow),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    render_scrollable_list(frame, area, items, ui_state.selected, block);
}
