//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a bookmark's added time (milliseconds since the Unix epoch) as a UTC date
///
/// # Examples
/// ```
/// use bookmarktui::logic::formatting::format_date_added;
///
/// assert_eq!(format_date_added(1_609_459_200_000), Some("2021-01-01".to_string()));
/// ```
pub fn format_date_added(millis: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_millis(millis).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when cut
///
/// Wide characters (CJK, emoji) count as two columns.
///
/// # Examples
/// ```
/// use bookmarktui::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("bookmarks", 20), "bookmarks");
/// assert_eq!(truncate_to_width("bookmarks", 5), "book…");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if width + ch_width > max_width - 1 {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

/// Pad `text` with spaces to exactly `width` columns (truncating if longer)
pub fn pad_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_added_epoch() {
        assert_eq!(format_date_added(0), Some("1970-01-01".to_string()));
    }

    #[test]
    fn test_truncate_exact_fit() {
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide
        let cut = truncate_to_width("书签书签", 5);
        assert_eq!(cut, "书签…");
        assert!(cut.width() <= 5);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
    }
}
