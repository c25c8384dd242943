//! Bookmark List UI
//!
//! Translates rows from `logic::tree` into list items. Every row is exactly
//! as wide as the list's inner area, with the pin affordance in the last
//! `AFFORDANCE_WIDTH` columns so mouse hit testing can find it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::logic::formatting::pad_to_width;
use crate::logic::layout::{indent, AFFORDANCE_WIDTH};
use crate::logic::tree::{Row, PINNED_MARK, PIN_AFFORDANCE};

/// Unpin affordance of a pinned row
const UNPIN_AFFORDANCE: &str = "✕";

/// Build the spans of one row (extracted for testability)
fn build_row_spans(row: &Row, indent_width: u16, inner_width: u16) -> Vec<Span<'static>> {
    let text_width = inner_width.saturating_sub(AFFORDANCE_WIDTH) as usize;
    let lead = indent(row.depth(), indent_width);

    let (text, style) = match row {
        Row::PinnedHeader => (
            row.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Row::Pinned { .. } => (format!("  {}", row.label()), Style::default().fg(Color::Yellow)),
        Row::Folder { expanded, .. } => {
            let marker = if *expanded { "▾" } else { "▸" };
            (
                format!("{}{} {}", lead, marker, row.label()),
                Style::default().fg(Color::Cyan),
            )
        }
        Row::Bookmark { .. } | Row::SearchResult(_) => {
            (format!("{}  {}", lead, row.label()), Style::default())
        }
    };

    let affordance = match row {
        Row::Bookmark { pinned: true, .. } => {
            Span::styled(format!(" {} ", PINNED_MARK), Style::default().fg(Color::Yellow))
        }
        Row::Bookmark { .. } => {
            Span::styled(format!(" {} ", PIN_AFFORDANCE), Style::default().fg(Color::DarkGray))
        }
        Row::Pinned { .. } => {
            Span::styled(format!(" {} ", UNPIN_AFFORDANCE), Style::default().fg(Color::DarkGray))
        }
        _ => Span::raw(" ".repeat(AFFORDANCE_WIDTH as usize)),
    };

    vec![Span::styled(pad_to_width(&text, text_width), style), affordance]
}

/// Render the bookmark list
///
/// `state` carries the selection in and the scroll offset out.
pub fn render_bookmark_list(
    f: &mut Frame,
    area: Rect,
    rows: &[Row],
    indent_width: u16,
    title: &str,
    state: &mut ListState,
) {
    let inner_width = area.width.saturating_sub(2);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(Line::from(build_row_spans(row, indent_width, inner_width))))
        .collect();

    // No highlight symbol: it would shift the affordance column
    let list = List::new(items)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, state);
}
