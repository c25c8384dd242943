//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **BookmarksModel**: Fetched tree, flat search index, pinned set
//! - **UiModel**: Search box, current view, expand state, selection, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O (store, opener, persistence) lives in App
//! - Transitions return an `Effect` when they need I/O done on their behalf

pub mod bookmarks;
pub mod types;
pub mod ui;

pub use bookmarks::BookmarksModel;
pub use types::*;
pub use ui::UiModel;

use crate::api::{BookmarkNode, NodeKind};
use crate::logic::navigation;
use crate::logic::pinned::PinnedSet;
use crate::logic::search::{self, SearchMode};
use crate::logic::tree::{self, Row};

/// I/O a transition asks the caller to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Request the full tree from the bookmark store
    FetchTree,
}

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Bookmark data (tree, index, pinned set)
    pub bookmarks: BookmarksModel,

    /// UI state (search, view, selection)
    pub ui: UiModel,
}

impl Model {
    /// Create initial model in the uninitialized state
    pub fn new(indent_width: u16, pinned: PinnedSet) -> Self {
        Self {
            bookmarks: BookmarksModel::new(pinned),
            ui: UiModel::new(indent_width),
        }
    }

    /// Rows the list currently shows
    pub fn visible_rows(&self) -> Vec<Row> {
        match &self.ui.view {
            View::Empty => Vec::new(),
            View::Tree => tree::visible_rows(
                &self.bookmarks.forest,
                &self.bookmarks.pinned,
                &self.ui.tree_state,
            ),
            View::Filtered(results) => tree::filtered_rows(results),
        }
    }

    pub fn selected_row(&self) -> Option<Row> {
        let index = self.ui.selected_index?;
        self.visible_rows().into_iter().nth(index)
    }

    /// Record that a tree fetch was sent
    pub fn fetch_sent(&mut self) {
        self.bookmarks.pending_fetches += 1;
    }

    /// Replace the search box value and re-derive the view
    pub fn set_query(&mut self, query: String) -> Effect {
        self.ui.search_query = query;
        self.rerender()
    }

    /// Full re-render from the current search box value
    ///
    /// A non-empty query filters the flat index immediately. An empty query
    /// clears the list and asks for a fresh tree; the tree view appears when
    /// `apply_tree` receives it.
    pub fn rerender(&mut self) -> Effect {
        match search::search_mode(&self.ui.search_query) {
            SearchMode::Tree => {
                self.ui.view = View::Empty;
                self.ui.tree_state.reset();
                Effect::FetchTree
            }
            SearchMode::Filtered(lowered) => {
                let results = search::filter(&self.bookmarks.flat, &lowered);
                self.ui.view = View::Filtered(results);
                self.clamp_selection();
                Effect::None
            }
        }
    }

    /// Apply a completed tree fetch
    ///
    /// An absent tree, or a root that is not a folder, is ignored: nothing
    /// changes and nothing is rendered from it. Otherwise the forest and the
    /// search index are replaced, and the tree view is rebuilt with every
    /// folder collapsed while the search box is still empty.
    pub fn apply_tree(&mut self, root: Option<BookmarkNode>) {
        self.bookmarks.pending_fetches = self.bookmarks.pending_fetches.saturating_sub(1);

        let Some(root) = root else {
            return;
        };
        let NodeKind::Folder { children } = root.kind else {
            return;
        };

        self.bookmarks.set_forest(children);

        match search::search_mode(&self.ui.search_query) {
            SearchMode::Tree => {
                self.ui.view = View::Tree;
                self.ui.tree_state.reset();
            }
            SearchMode::Filtered(lowered) => {
                self.ui.view = View::Filtered(search::filter(&self.bookmarks.flat, &lowered));
            }
        }
        self.clamp_selection();
    }

    /// Flip a folder's expanded state (tree view only)
    pub fn toggle_folder(&mut self, folder_id: &str) {
        if self.ui.view == View::Tree {
            self.ui.tree_state.toggle(folder_id);
            self.clamp_selection();
        }
    }

    pub fn expand_folder(&mut self, folder_id: &str) {
        if self.ui.view == View::Tree {
            self.ui.tree_state.expand(folder_id);
        }
    }

    pub fn collapse_folder(&mut self, folder_id: &str) {
        if self.ui.view == View::Tree {
            self.ui.tree_state.collapse(folder_id);
            self.clamp_selection();
        }
    }

    /// Pin a bookmark from the tree by id; false if unknown, a folder, or already pinned
    pub fn pin(&mut self, bookmark_id: &str) -> bool {
        let Some(node) = tree::find_node(&self.bookmarks.forest, bookmark_id) else {
            return false;
        };
        if node.is_folder() {
            return false;
        }
        let snapshot = node.clone();
        self.bookmarks.pinned.pin(snapshot)
    }

    pub fn unpin(&mut self, bookmark_id: &str) -> bool {
        self.bookmarks.pinned.unpin(bookmark_id)
    }

    pub fn select_next(&mut self) {
        let rows = self.visible_rows();
        self.ui.selected_index = navigation::next_selection(&rows, self.ui.selected_index);
    }

    pub fn select_prev(&mut self) {
        let rows = self.visible_rows();
        self.ui.selected_index = navigation::prev_selection(&rows, self.ui.selected_index);
    }

    pub fn select_first(&mut self) {
        self.ui.selected_index = navigation::first_selection(&self.visible_rows());
    }

    pub fn select_last(&mut self) {
        self.ui.selected_index = navigation::last_selection(&self.visible_rows());
    }

    pub fn select_page(&mut self, delta: isize) {
        let rows = self.visible_rows();
        self.ui.selected_index = navigation::page_selection(&rows, self.ui.selected_index, delta);
    }

    /// Select a row by index if it is selectable
    pub fn select_index(&mut self, index: usize) -> bool {
        let rows = self.visible_rows();
        match rows.get(index) {
            Some(row) if row.is_selectable() => {
                self.ui.selected_index = Some(index);
                true
            }
            _ => false,
        }
    }

    fn clamp_selection(&mut self) {
        let rows = self.visible_rows();
        self.ui.selected_index = navigation::clamp_selection(&rows, self.ui.selected_index);
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
