use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::formatting::format_date_added;

/// What the status bar describes
pub struct StatusInfo<'a> {
    pub mode: &'a str,
    /// Fetch in flight and nothing shown yet
    pub loading: bool,
    pub bookmark_count: usize,
    /// Matches for the current query (None in tree view)
    pub result_count: Option<usize>,
    pub pinned_count: usize,
    /// Url and added time (ms since epoch) of the selected bookmark
    pub selected: Option<(&'a str, Option<i64>)>,
}

/// Build the status line (extracted for testability)
fn build_status_line(info: &StatusInfo) -> String {
    let mut metrics = Vec::new();

    if info.loading {
        metrics.push("Mode: Loading...".to_string());
    } else {
        metrics.push(format!("Mode: {}", info.mode));
    }

    match info.result_count {
        Some(count) => metrics.push(format!("Results: {}/{}", count, info.bookmark_count)),
        None => metrics.push(format!("Bookmarks: {}", info.bookmark_count)),
    }

    metrics.push(format!("Pinned: {}", info.pinned_count));

    if let Some((url, date_added)) = info.selected {
        metrics.push(format!("URL: {}", url));
        if let Some(date) = date_added.and_then(format_date_added) {
            metrics.push(format!("Added: {}", date));
        }
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let status_line = build_status_line(info);

    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            // Split on first colon to separate label from value
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
