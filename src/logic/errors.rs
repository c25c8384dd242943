use anyhow::Error;

/// Format error message for display - show the root cause only
///
/// Context layers added with `.context(...)` are useful in the debug log but
/// too long for a toast, so walk the chain down to the deepest error.
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

/// Full chain on one line, for the debug log
pub fn format_error_chain(error: &Error) -> String {
    error
        .chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("permission denied");
        let outer = inner.context("Failed to persist key 'pinnedBookmarks'");
        assert_eq!(format_error_message(&outer), "permission denied");
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = anyhow::anyhow!("custom error message");
        assert_eq!(format_error_message(&err), "custom error message");
    }

    #[test]
    fn test_format_chain_joins_layers() {
        let err = anyhow::anyhow!("no such file").context("Failed to read bookmarks file");
        assert_eq!(
            format_error_chain(&err),
            "Failed to read bookmarks file: no such file"
        );
    }
}
