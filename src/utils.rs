/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("bookmarktui-debug.log");
    path
}

/// Get platform-specific storage fallback path
pub fn get_storage_fallback_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("bookmarktui");
    path.push("storage.db");
    path
}
