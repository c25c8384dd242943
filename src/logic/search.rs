//! Search Logic
//!
//! Pure functions for flattening the bookmark tree into a search index and
//! filtering it by a case-insensitive substring query.

use crate::api::{BookmarkNode, NodeKind};

/// A leaf bookmark extracted from the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatBookmark {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl FlatBookmark {
    /// Row label used by the filtered view
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.url)
    }
}

/// How the list should be rendered for a given search box value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// Empty query: show the full nested tree
    Tree,
    /// Non-empty query, already lowercased
    Filtered(String),
}

pub fn search_mode(query: &str) -> SearchMode {
    if query.is_empty() {
        SearchMode::Tree
    } else {
        SearchMode::Filtered(query.to_lowercase())
    }
}

/// Collect every leaf bookmark of the forest in depth-first pre-order
///
/// Folders are descended into and never appear in the output.
///
/// # Examples
/// ```
/// use bookmarktui::api::BookmarkNode;
/// use bookmarktui::logic::search::flatten;
///
/// let forest = vec![
///     BookmarkNode::folder("10", "Docs", vec![BookmarkNode::bookmark("1", "API", "http://a")]),
///     BookmarkNode::bookmark("2", "Home", "http://h"),
/// ];
/// let ids: Vec<String> = flatten(&forest).into_iter().map(|b| b.id).collect();
/// assert_eq!(ids, vec!["1", "2"]);
/// ```
pub fn flatten(forest: &[BookmarkNode]) -> Vec<FlatBookmark> {
    let mut result = Vec::new();
    // Reversed so the first sibling is popped first
    let mut stack: Vec<&BookmarkNode> = forest.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match &node.kind {
            NodeKind::Folder { children } => stack.extend(children.iter().rev()),
            NodeKind::Bookmark { url } => result.push(FlatBookmark {
                id: node.id.clone(),
                title: node.title.clone(),
                url: url.clone(),
            }),
        }
    }

    result
}

/// Check a bookmark against an already-lowercased query
pub fn matches(bookmark: &FlatBookmark, lowered_query: &str) -> bool {
    bookmark.title.to_lowercase().contains(lowered_query)
        || bookmark.url.to_lowercase().contains(lowered_query)
}

/// Keep the bookmarks whose title or url contains `query` (case-insensitive)
///
/// Order follows the input. An empty query matches everything here; callers
/// decide separately (via `search_mode`) that empty means "show the tree".
pub fn filter(flat: &[FlatBookmark], query: &str) -> Vec<FlatBookmark> {
    let lowered = query.to_lowercase();
    flat.iter()
        .filter(|bookmark| matches(bookmark, &lowered))
        .cloned()
        .collect()
}
