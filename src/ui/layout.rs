use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Search input area
    pub search_area: Rect,
    /// Bookmark list area
    pub list_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, filtering: bool) -> LayoutInfo {
    // Legend height depends on how its hotkeys wrap at this width
    let legend_height = super::legend::calculate_legend_height(terminal_size.width, filtering);

    // Search box (top) + list + legend + status bar (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Search input (top border, text, bottom border)
            Constraint::Min(3),                // Bookmark list
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        search_area: main_chunks[0],
        list_area: main_chunks[1],
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_areas_top_to_bottom() {
        let info = calculate_layout(Rect::new(0, 0, 120, 40), false);
        assert_eq!(info.search_area.y, 0);
        assert_eq!(info.search_area.height, 3);
        assert_eq!(info.list_area.y, 3);
        assert_eq!(info.status_area.height, 3);
        assert_eq!(info.status_area.y + info.status_area.height, 40);
        assert_eq!(
            info.legend_area.y + info.legend_area.height,
            info.status_area.y
        );
    }

    #[test]
    fn test_list_gets_remaining_height() {
        let info = calculate_layout(Rect::new(0, 0, 120, 40), false);
        let fixed = info.search_area.height + info.legend_area.height + info.status_area.height;
        assert_eq!(info.list_area.height, 40 - fixed);
    }
}
