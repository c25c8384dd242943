use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(filtering: bool) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut hotkey_spans = vec![
        key("↑/↓"),
        Span::raw(":Nav  "),
        key("Enter"),
        Span::raw(":Open  "),
    ];

    // Folders and pins exist only in the tree view
    if !filtering {
        hotkey_spans.extend(vec![
            key("→/←"),
            Span::raw(":Expand/Collapse  "),
            key("^P"),
            Span::raw(":Pin/Unpin  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("^U"),
            Span::raw(":Clear  "),
            key("Esc"),
            Span::raw(":Clear Search  "),
        ]);
    }

    // Quit - always available
    hotkey_spans.extend(vec![key("^Q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(filtering: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(filtering));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes between tree and search views)
pub fn render_legend(f: &mut Frame, area: Rect, filtering: bool) {
    f.render_widget(build_legend_paragraph(filtering), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, filtering: bool) -> u16 {
    // Count lines WITHOUT the block; line_count() doesn't account for borders
    let hotkey_line = Line::from(build_hotkey_spans(filtering));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_shows_pin_in_tree_view() {
        let text = spans_to_text(&build_hotkey_spans(false));
        assert!(
            text.contains("^P:Pin/Unpin"),
            "Tree legend should offer pinning, got: {}",
            text
        );
        assert!(text.contains("Expand/Collapse"));
    }

    #[test]
    fn test_legend_hides_pin_while_searching() {
        let text = spans_to_text(&build_hotkey_spans(true));
        assert!(
            !text.contains("Pin"),
            "Search legend should not offer pinning, got: {}",
            text
        );
        assert!(text.contains("Esc:Clear Search"));
    }

    #[test]
    fn test_legend_always_shows_quit() {
        for filtering in [false, true] {
            let text = spans_to_text(&build_hotkey_spans(filtering));
            assert!(text.ends_with("^Q:Quit"));
        }
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(200, false);
        let narrow = calculate_legend_height(30, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
