//! Shared types for the Model

use crate::logic::search::FlatBookmark;

/// What the list area currently shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Nothing to show: no tree yet, an empty store, or cleared while a fetch is in flight
    Empty,
    /// Nested tree with the pinned block on top
    Tree,
    /// Flat search results for a non-empty query
    Filtered(Vec<FlatBookmark>),
}

impl View {
    pub fn is_filtered(&self) -> bool {
        matches!(self, View::Filtered(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            View::Empty => "Empty",
            View::Tree => "Tree",
            View::Filtered(_) => "Search",
        }
    }
}
