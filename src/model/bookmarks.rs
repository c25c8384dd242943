//! Bookmarks Model
//!
//! This sub-model contains the data fetched from the host bookmark store and
//! everything derived from it: the forest, the flat search index and the
//! pinned set.

use crate::api::BookmarkNode;
use crate::logic::pinned::PinnedSet;
use crate::logic::search::{self, FlatBookmark};

/// Bookmark data owned by the session
#[derive(Clone, Debug, Default)]
pub struct BookmarksModel {
    // ============================================
    // TREE
    // ============================================
    /// Children of the store's invisible root, from the latest successful fetch
    pub forest: Vec<BookmarkNode>,

    /// Leaf bookmarks of `forest` in depth-first pre-order
    pub flat: Vec<FlatBookmark>,

    /// Fetches sent to the loader that have not answered yet
    pub pending_fetches: usize,

    // ============================================
    // PINNED
    // ============================================
    pub pinned: PinnedSet,
}

impl BookmarksModel {
    pub fn new(pinned: PinnedSet) -> Self {
        Self {
            pinned,
            ..Self::default()
        }
    }

    /// Replace the tree and rebuild the search index
    pub fn set_forest(&mut self, forest: Vec<BookmarkNode>) {
        self.flat = search::flatten(&forest);
        self.forest = forest;
    }

    pub fn bookmark_count(&self) -> usize {
        self.flat.len()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_is_unloaded() {
        let model = BookmarksModel::new(PinnedSet::new());
        assert!(model.forest.is_empty());
        assert!(!model.is_loading());
    }

    #[test]
    fn test_set_forest_rebuilds_index() {
        let mut model = BookmarksModel::new(PinnedSet::new());
        model.set_forest(vec![BookmarkNode::bookmark("1", "A", "http://a")]);
        assert_eq!(model.bookmark_count(), 1);

        model.set_forest(vec![
            BookmarkNode::bookmark("1", "A", "http://a"),
            BookmarkNode::bookmark("2", "B", "http://b"),
        ]);
        assert_eq!(model.bookmark_count(), 2);
    }
}
