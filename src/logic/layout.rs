//! Layout calculation logic
//!
//! Pure functions for row indentation and for mapping a mouse position back
//! to the list row it landed on.

use ratatui::layout::Rect;

/// Columns reserved at the right edge of a row for the pin affordance
pub const AFFORDANCE_WIDTH: u16 = 3;

/// Leading whitespace for a row at `depth`
///
/// # Examples
/// ```
/// use bookmarktui::logic::layout::indent;
///
/// assert_eq!(indent(0, 2), "");
/// assert_eq!(indent(3, 2), "      ");
/// ```
pub fn indent(depth: usize, indent_width: u16) -> String {
    " ".repeat(depth * indent_width as usize)
}

/// Where a click landed inside the bookmark list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    /// Index into the visible rows
    pub index: usize,
    /// Whether the click hit the pin affordance column
    pub on_affordance: bool,
}

/// Map a terminal position to a row of a bordered list
///
/// `list_area` is the outer area including the border, `offset` the index of
/// the first visible row. Exactly one row (the innermost element under the
/// cursor) receives the click; borders and empty space receive nothing.
pub fn hit_test(
    list_area: Rect,
    offset: usize,
    row_count: usize,
    column: u16,
    row: u16,
) -> Option<RowHit> {
    // Inner area excludes the one-cell border on each side
    let inner_x = list_area.x.saturating_add(1);
    let inner_y = list_area.y.saturating_add(1);
    let inner_width = list_area.width.saturating_sub(2);
    let inner_height = list_area.height.saturating_sub(2);

    if column < inner_x
        || column >= inner_x + inner_width
        || row < inner_y
        || row >= inner_y + inner_height
    {
        return None;
    }

    let index = offset + (row - inner_y) as usize;
    if index >= row_count {
        return None;
    }

    let affordance_start = inner_x + inner_width.saturating_sub(AFFORDANCE_WIDTH);
    Some(RowHit {
        index,
        on_affordance: column >= affordance_start,
    })
}
