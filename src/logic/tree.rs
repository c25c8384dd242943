//! Tree view logic
//!
//! Turns the bookmark forest, the pinned set and the per-folder expand state
//! into the ordered rows the list widget shows. Nothing here touches the
//! terminal, so every rendering rule can be unit tested.

use std::collections::HashSet;

use crate::api::{BookmarkNode, NodeKind};
use crate::logic::pinned::PinnedSet;
use crate::logic::search::FlatBookmark;

/// Trailing glyph of a pinned row
pub const PINNED_MARK: &str = "★";
/// Pin affordance of a bookmark row
pub const PIN_AFFORDANCE: &str = "☆";

/// Expanded/collapsed state per folder id; every folder starts collapsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeState {
    expanded: HashSet<String>,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, folder_id: &str) -> bool {
        self.expanded.contains(folder_id)
    }

    /// Flip one folder. Ancestors and descendants keep their state.
    pub fn toggle(&mut self, folder_id: &str) {
        if !self.expanded.remove(folder_id) {
            self.expanded.insert(folder_id.to_string());
        }
    }

    pub fn expand(&mut self, folder_id: &str) {
        self.expanded.insert(folder_id.to_string());
    }

    pub fn collapse(&mut self, folder_id: &str) {
        self.expanded.remove(folder_id);
    }

    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}

/// What activating a row's pin affordance does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinAction {
    Pin,
    Unpin,
}

/// One visible line of the bookmark list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Title of the pinned block
    PinnedHeader,
    Pinned {
        id: String,
        title: String,
        url: Option<String>,
    },
    Folder {
        id: String,
        title: String,
        depth: usize,
        expanded: bool,
    },
    Bookmark {
        id: String,
        title: String,
        url: String,
        depth: usize,
        pinned: bool,
    },
    /// Filtered-mode result; no nesting and no pin affordance
    SearchResult(FlatBookmark),
}

impl Row {
    /// Text shown for the row, without indentation or affordance
    pub fn label(&self) -> String {
        match self {
            Row::PinnedHeader => "Pinned".to_string(),
            Row::Pinned { title, .. } => format!("{} {}", title, PINNED_MARK),
            Row::Folder { title, .. } => title.clone(),
            Row::Bookmark { title, .. } => title.clone(),
            Row::SearchResult(bookmark) => bookmark.label(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Row::PinnedHeader => None,
            Row::Pinned { id, .. } | Row::Folder { id, .. } | Row::Bookmark { id, .. } => Some(id),
            Row::SearchResult(bookmark) => Some(&bookmark.id),
        }
    }

    /// Url opened when the row is activated
    pub fn url(&self) -> Option<&str> {
        match self {
            Row::Pinned { url, .. } => url.as_deref(),
            Row::Bookmark { url, .. } => Some(url),
            Row::SearchResult(bookmark) => Some(&bookmark.url),
            Row::PinnedHeader | Row::Folder { .. } => None,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Row::Folder { depth, .. } | Row::Bookmark { depth, .. } => *depth,
            _ => 0,
        }
    }

    pub fn pin_action(&self) -> Option<PinAction> {
        match self {
            Row::Bookmark { .. } => Some(PinAction::Pin),
            Row::Pinned { .. } => Some(PinAction::Unpin),
            _ => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, Row::PinnedHeader)
    }
}

/// Rows of the nested view: the pinned block (if any) followed by the forest
///
/// Children of a collapsed folder are not emitted. Traversal uses an explicit
/// stack so arbitrarily deep folder nesting is safe.
pub fn visible_rows(forest: &[BookmarkNode], pinned: &PinnedSet, state: &TreeState) -> Vec<Row> {
    let mut rows = Vec::new();

    if !pinned.is_empty() {
        rows.push(Row::PinnedHeader);
        for node in pinned.entries() {
            rows.push(Row::Pinned {
                id: node.id.clone(),
                title: node.title.clone(),
                url: node.url().map(str::to_string),
            });
        }
    }

    let mut stack: Vec<(&BookmarkNode, usize)> = forest.iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        match &node.kind {
            NodeKind::Folder { children } => {
                let expanded = state.is_expanded(&node.id);
                rows.push(Row::Folder {
                    id: node.id.clone(),
                    title: node.title.clone(),
                    depth,
                    expanded,
                });
                if expanded {
                    stack.extend(children.iter().rev().map(|child| (child, depth + 1)));
                }
            }
            NodeKind::Bookmark { url } => rows.push(Row::Bookmark {
                id: node.id.clone(),
                title: node.title.clone(),
                url: url.clone(),
                depth,
                pinned: pinned.contains(&node.id),
            }),
        }
    }

    rows
}

/// Rows of the filtered view, one per match in flattener order
pub fn filtered_rows(results: &[FlatBookmark]) -> Vec<Row> {
    results.iter().cloned().map(Row::SearchResult).collect()
}

/// Find a node anywhere in the forest by id
pub fn find_node<'a>(forest: &'a [BookmarkNode], id: &str) -> Option<&'a BookmarkNode> {
    let mut stack: Vec<&BookmarkNode> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = node.children() {
            stack.extend(children.iter());
        }
    }
    None
}
