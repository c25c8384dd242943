//! Navigation selection logic
//!
//! Pure functions for moving the selection through the visible rows. The
//! pinned block header is never selectable, so every function skips rows for
//! which `Row::is_selectable` is false.

use crate::logic::tree::Row;

/// Calculate the next selection index with wrapping
///
/// Advances to the next selectable row. If at the end, wraps around to the
/// first selectable row. If nothing is selected, selects the first one.
///
/// # Examples
/// ```
/// use bookmarktui::logic::navigation::next_selection;
/// use bookmarktui::logic::tree::Row;
///
/// let rows = vec![
///     Row::PinnedHeader,
///     Row::Folder { id: "1".into(), title: "A".into(), depth: 0, expanded: false },
///     Row::Folder { id: "2".into(), title: "B".into(), depth: 0, expanded: false },
/// ];
///
/// assert_eq!(next_selection(&rows, None), Some(1));
/// assert_eq!(next_selection(&rows, Some(1)), Some(2));
/// assert_eq!(next_selection(&rows, Some(2)), Some(1)); // wraps past the header
/// ```
pub fn next_selection(rows: &[Row], current: Option<usize>) -> Option<usize> {
    let start = match current {
        Some(i) if i + 1 < rows.len() => i + 1,
        Some(_) => 0,
        None => 0,
    };

    (start..rows.len())
        .chain(0..start)
        .find(|&i| rows[i].is_selectable())
}

/// Calculate the previous selection index with wrapping
///
/// If nothing is selected, selects the last selectable row.
pub fn prev_selection(rows: &[Row], current: Option<usize>) -> Option<usize> {
    if rows.is_empty() {
        return None;
    }

    let start = match current {
        Some(i) if i > 0 && i <= rows.len() => i - 1,
        _ => rows.len() - 1,
    };

    (0..=start)
        .rev()
        .chain((start + 1..rows.len()).rev())
        .find(|&i| rows[i].is_selectable())
}

pub fn first_selection(rows: &[Row]) -> Option<usize> {
    rows.iter().position(Row::is_selectable)
}

pub fn last_selection(rows: &[Row]) -> Option<usize> {
    rows.iter().rposition(Row::is_selectable)
}

/// Move by `delta` rows without wrapping, landing on the nearest selectable row
pub fn page_selection(rows: &[Row], current: Option<usize>, delta: isize) -> Option<usize> {
    if rows.is_empty() {
        return None;
    }

    let current = current.unwrap_or(0) as isize;
    let target = (current + delta).clamp(0, rows.len() as isize - 1) as usize;

    if rows[target].is_selectable() {
        return Some(target);
    }

    // Prefer continuing in the direction of travel
    if delta >= 0 {
        (target..rows.len())
            .find(|&i| rows[i].is_selectable())
            .or_else(|| (0..target).rev().find(|&i| rows[i].is_selectable()))
    } else {
        (0..=target)
            .rev()
            .find(|&i| rows[i].is_selectable())
            .or_else(|| (target..rows.len()).find(|&i| rows[i].is_selectable()))
    }
}

/// Keep a selection valid after the rows changed
///
/// Out-of-range selections move to the last row; a selection on a
/// non-selectable row moves to the next selectable one.
pub fn clamp_selection(rows: &[Row], current: Option<usize>) -> Option<usize> {
    let Some(current) = current else {
        return first_selection(rows);
    };

    if rows.is_empty() {
        return None;
    }

    let clamped = current.min(rows.len() - 1);
    if rows[clamped].is_selectable() {
        Some(clamped)
    } else {
        page_selection(rows, Some(clamped), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str) -> Row {
        Row::Folder {
            id: id.to_string(),
            title: id.to_string(),
            depth: 0,
            expanded: false,
        }
    }

    fn rows_with_header() -> Vec<Row> {
        vec![
            Row::PinnedHeader,
            Row::Pinned {
                id: "p".to_string(),
                title: "P".to_string(),
                url: Some("http://p".to_string()),
            },
            folder("a"),
            folder("b"),
        ]
    }

    #[test]
    fn test_next_selection_empty() {
        assert_eq!(next_selection(&[], None), None);
        assert_eq!(next_selection(&[], Some(3)), None);
    }

    #[test]
    fn test_next_selection_skips_header() {
        let rows = rows_with_header();
        assert_eq!(next_selection(&rows, None), Some(1));
        assert_eq!(next_selection(&rows, Some(3)), Some(1));
    }

    #[test]
    fn test_prev_selection_wraps() {
        let rows = rows_with_header();
        assert_eq!(prev_selection(&rows, Some(1)), Some(3));
        assert_eq!(prev_selection(&rows, Some(3)), Some(2));
        assert_eq!(prev_selection(&rows, None), Some(3));
    }

    #[test]
    fn test_prev_selection_only_header() {
        assert_eq!(prev_selection(&[Row::PinnedHeader], None), None);
    }

    #[test]
    fn test_first_and_last() {
        let rows = rows_with_header();
        assert_eq!(first_selection(&rows), Some(1));
        assert_eq!(last_selection(&rows), Some(3));
    }

    #[test]
    fn test_page_selection_clamps() {
        let rows = rows_with_header();
        assert_eq!(page_selection(&rows, Some(2), 10), Some(3));
        assert_eq!(page_selection(&rows, Some(3), -10), Some(1));
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let rows = vec![folder("a"), folder("b")];
        assert_eq!(clamp_selection(&rows, Some(5)), Some(1));
        assert_eq!(clamp_selection(&rows, None), Some(0));
        assert_eq!(clamp_selection(&[], Some(0)), None);
    }

    #[test]
    fn test_clamp_selection_moves_off_header() {
        let rows = rows_with_header();
        assert_eq!(clamp_selection(&rows, Some(0)), Some(1));
    }
}
