use crate::logic::tree::{self, Row};
use crate::model::View;
use crate::App;
use ratatui::widgets::ListState;
use ratatui::Frame;

use super::{bookmark_list, layout, legend, search, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let filtering = app.model.ui.view.is_filtered();
    let layout_info = layout::calculate_layout(size, filtering);

    let rows = app.model.visible_rows();
    let result_count = match &app.model.ui.view {
        View::Filtered(results) => Some(results.len()),
        _ => None,
    };

    search::render_search_input(
        f,
        layout_info.search_area,
        &app.model.ui.search_query,
        result_count,
    );

    let title = match &app.model.ui.view {
        View::Filtered(_) => " Results ".to_string(),
        View::Empty if app.model.bookmarks.is_loading() => " Bookmarks (loading...) ".to_string(),
        _ => " Bookmarks ".to_string(),
    };

    // Create temporary ListState for rendering
    let mut list_state = ListState::default()
        .with_offset(app.model.ui.list_offset)
        .with_selected(app.model.ui.selected_index);
    bookmark_list::render_bookmark_list(
        f,
        layout_info.list_area,
        &rows,
        app.model.ui.indent_width,
        &title,
        &mut list_state,
    );
    // Sync back scroll position and geometry for mouse hit testing
    app.model.ui.list_offset = list_state.offset();
    app.model.ui.list_area = Some(layout_info.list_area);

    legend::render_legend(f, layout_info.legend_area, filtering);

    // Selected bookmark details come from the tree or the pinned snapshot
    let selected = app
        .model
        .ui
        .selected_index
        .and_then(|index| rows.get(index))
        .and_then(|row| {
            let url = row.url()?;
            let id = row.id()?;
            let date_added = match row {
                Row::Pinned { .. } => app.model.bookmarks.pinned.get(id).and_then(|n| n.date_added),
                _ => tree::find_node(&app.model.bookmarks.forest, id).and_then(|n| n.date_added),
            };
            Some((url, date_added))
        });

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &status_bar::StatusInfo {
            mode: app.model.ui.view.as_str(),
            loading: app.model.ui.view == View::Empty && app.model.bookmarks.is_loading(),
            bookmark_count: app.model.bookmarks.bookmark_count(),
            result_count,
            pinned_count: app.model.bookmarks.pinned.len(),
            selected,
        },
    );

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
