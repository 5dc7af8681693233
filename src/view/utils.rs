//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Width of the index column (digits + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

pub fn format_dimensions(width: u32, height: u32) -> String {
    if width == 0 || height == 0 {
        "?x?".to_string()
    } else {
        format!("{}x{}", width, height)
    }
}

/// Centered popup rectangle clamped to the frame
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_pads_and_cuts() {
        assert_eq!(truncate_string("cat", 5), "cat  ");
        assert_eq!(truncate_string("dancing cat", 8), "danci...");
    }

    #[test]
    fn num_width_grows_with_digits() {
        assert_eq!(calculate_num_width(0), 2);
        assert_eq!(calculate_num_width(9), 2);
        assert_eq!(calculate_num_width(50), 3);
        assert_eq!(calculate_num_width(500), 4);
    }

    #[test]
    fn centered_rect_fits_inside_small_areas() {
        let area = Rect { x: 0, y: 0, width: 20, height: 6 };
        let popup = centered_rect(area, 60, 10);
        assert_eq!(popup.width, 16);
        assert_eq!(popup.height, 4);
        assert_eq!(popup.x, 2);
        assert_eq!(popup.y, 1);
    }

    #[test]
    fn unknown_dimensions_render_placeholder() {
        assert_eq!(format_dimensions(0, 10), "?x?");
        assert_eq!(format_dimensions(200, 113), "200x113");
    }
}
