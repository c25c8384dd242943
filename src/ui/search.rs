//! Search Input UI
//!
//! Renders the search input box with query, result count, and blinking cursor.
//! The box is always active: every printable key edits it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title of the search box
fn search_title(query: &str, match_count: Option<usize>) -> String {
    if query.is_empty() {
        " Search bookmarks ".to_string()
    } else {
        match match_count {
            Some(count) => format!(" Search ({} matches) - Esc to clear ", count),
            None => " Search - Esc to clear ".to_string(),
        }
    }
}

/// Render search input box at the top
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query
/// - `match_count`: Number of matches (None while showing the tree)
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str, match_count: Option<usize>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(search_title(query, match_count))
        .style(Style::default().fg(Color::Cyan));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Gray)),
        Span::raw(query),
        Span::styled("█", cursor_style), // Blinking cursor
    ]);

    let paragraph = Paragraph::new(vec![input_line])
        .block(block)
        .style(Style::default());

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_without_query() {
        assert_eq!(search_title("", None), " Search bookmarks ");
    }

    #[test]
    fn test_title_with_matches() {
        assert_eq!(
            search_title("api", Some(1)),
            " Search (1 matches) - Esc to clear "
        );
    }
}
