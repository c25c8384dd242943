//! UI state transition logic
//!
//! Pure functions for transient UI state.

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use bookmarktui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(0));
/// assert!(!should_dismiss_toast(1499));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
