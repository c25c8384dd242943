//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! the search box, the current view, selection and transient visual state.

use ratatui::layout::Rect;
use std::time::Instant;

use super::types::View;
use crate::logic::tree::TreeState;

/// UI state, reset piecemeal on every full re-render
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Columns of indentation per folder depth
    pub indent_width: u16,

    // ============================================
    // SEARCH
    // ============================================
    /// Current search box value
    pub search_query: String,

    // ============================================
    // LIST
    // ============================================
    /// What the list area shows
    pub view: View,

    /// Expanded folders; not persisted
    pub tree_state: TreeState,

    /// Selected row index into the visible rows
    pub selected_index: Option<usize>,

    /// First visible row, written back after each draw
    pub list_offset: usize,

    /// Outer area of the list (border included), written back after each draw
    pub list_area: Option<Rect>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(indent_width: u16) -> Self {
        Self {
            indent_width,
            search_query: String::new(),
            view: View::Empty,
            tree_state: TreeState::new(),
            selected_index: None,
            list_offset: 0,
            list_area: None,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed (older than 1.5 seconds)
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
