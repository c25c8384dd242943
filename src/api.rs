//! Host collaborators
//!
//! The bookmark tree types plus the two host APIs the app talks to:
//! - `BookmarkStore`: yields the full bookmark tree (root node)
//! - `TabOpener`: opens a url in a new browser tab
//!
//! `ChromiumBookmarks` reads the `Bookmarks` JSON file that Chrome, Chromium,
//! Brave and Edge keep in each profile directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Microseconds between 1601-01-01 (Windows epoch) and 1970-01-01
const WINDOWS_EPOCH_OFFSET_MICROS: i64 = 11_644_473_600_000_000;

/// A node in the bookmark tree: either a folder or a leaf bookmark, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NodeRecord", into = "NodeRecord")]
pub struct BookmarkNode {
    pub id: String,
    pub title: String,
    /// Milliseconds since the Unix epoch
    pub date_added: Option<i64>,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Folder { children: Vec<BookmarkNode> },
    Bookmark { url: String },
}

impl BookmarkNode {
    pub fn folder(id: impl Into<String>, title: impl Into<String>, children: Vec<BookmarkNode>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date_added: None,
            kind: NodeKind::Folder { children },
        }
    }

    pub fn bookmark(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date_added: None,
            kind: NodeKind::Bookmark { url: url.into() },
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Bookmark { url } => Some(url),
            NodeKind::Folder { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&[BookmarkNode]> {
        match &self.kind {
            NodeKind::Folder { children } => Some(children),
            NodeKind::Bookmark { .. } => None,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }
}

/// Wire shape of a node, matching the browser extension API
/// (`{"id","title","url"?,"children"?,"dateAdded"?}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<BookmarkNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_added: Option<i64>,
}

impl TryFrom<NodeRecord> for BookmarkNode {
    type Error = String;

    fn try_from(record: NodeRecord) -> Result<Self, Self::Error> {
        let kind = match (record.url, record.children) {
            (Some(url), None) => NodeKind::Bookmark { url },
            (None, Some(children)) => NodeKind::Folder { children },
            (Some(_), Some(_)) => {
                return Err(format!("node {} has both url and children", record.id))
            }
            (None, None) => return Err(format!("node {} has neither url nor children", record.id)),
        };

        Ok(BookmarkNode {
            id: record.id,
            title: record.title,
            date_added: record.date_added,
            kind,
        })
    }
}

impl From<BookmarkNode> for NodeRecord {
    fn from(node: BookmarkNode) -> Self {
        let (url, children) = match node.kind {
            NodeKind::Bookmark { url } => (Some(url), None),
            NodeKind::Folder { children } => (None, Some(children)),
        };
        NodeRecord {
            id: node.id,
            title: node.title,
            url,
            children,
            date_added: node.date_added,
        }
    }
}

/// Source of the full bookmark tree
///
/// `Ok(None)` means the store is empty or has an unexpected shape.
pub trait BookmarkStore: Send + Sync {
    fn get_tree(&self) -> Result<Option<BookmarkNode>>;
}

/// Opens urls in the user's browser
pub trait TabOpener {
    fn open_in_new_tab(&self, url: &str) -> Result<()>;
}

// ============================================
// CHROMIUM BOOKMARKS FILE
// ============================================

#[derive(Debug, Deserialize)]
struct ChromiumFile {
    #[serde(default)]
    roots: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChromiumNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    node_type: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    children: Vec<ChromiumNode>,
    #[serde(default)]
    date_added: Option<String>,
}

/// Top-level roots in display order
const CHROMIUM_ROOTS: [&str; 3] = ["bookmark_bar", "other", "synced"];

/// Bookmark store backed by a Chromium-family `Bookmarks` file
#[derive(Debug, Clone)]
pub struct ChromiumBookmarks {
    path: PathBuf,
}

impl ChromiumBookmarks {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookmarkStore for ChromiumBookmarks {
    fn get_tree(&self) -> Result<Option<BookmarkNode>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read bookmarks file {}", self.path.display()))?;

        parse_chromium_bookmarks(&contents)
    }
}

/// Parse a Chromium `Bookmarks` file into a synthetic root folder
///
/// The root's children are the store's top-level folders (bookmark bar,
/// other bookmarks, mobile bookmarks), skipping any that are absent or
/// malformed. Returns `None` when no usable root exists.
pub fn parse_chromium_bookmarks(contents: &str) -> Result<Option<BookmarkNode>> {
    let file: ChromiumFile =
        serde_json::from_str(contents).context("Bookmarks file is not valid JSON")?;

    let mut top_level = Vec::new();
    for key in CHROMIUM_ROOTS {
        let Some(value) = file.roots.get(key) else {
            continue;
        };
        let Ok(raw) = serde_json::from_value::<ChromiumNode>(value.clone()) else {
            continue;
        };
        if let Some(node) = convert_chromium_node(raw) {
            if node.is_folder() {
                top_level.push(node);
            }
        }
    }

    if top_level.is_empty() {
        return Ok(None);
    }

    Ok(Some(BookmarkNode::folder("0", "", top_level)))
}

/// Convert a raw node; entries that are neither a url nor a folder are dropped
fn convert_chromium_node(raw: ChromiumNode) -> Option<BookmarkNode> {
    let date_added = raw.date_added.as_deref().and_then(chromium_time_to_unix_millis);

    let kind = match raw.node_type.as_str() {
        "url" => NodeKind::Bookmark { url: raw.url? },
        "folder" => NodeKind::Folder {
            children: raw
                .children
                .into_iter()
                .filter_map(convert_chromium_node)
                .collect(),
        },
        _ => return None,
    };

    Some(BookmarkNode {
        id: raw.id,
        title: raw.name,
        date_added,
        kind,
    })
}

/// Chromium stores timestamps as microseconds since 1601-01-01, as a string
pub fn chromium_time_to_unix_millis(raw: &str) -> Option<i64> {
    let micros: i64 = raw.trim().parse().ok()?;
    if micros <= 0 {
        return None;
    }
    Some((micros - WINDOWS_EPOCH_OFFSET_MICROS) / 1000)
}

// ============================================
// TAB OPENER
// ============================================

/// Opens urls by spawning an external command with the url as its last argument
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl CommandOpener {
    /// Build from a command line such as `firefox --new-tab`
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TabOpener for CommandOpener {
    fn open_in_new_tab(&self, url: &str) -> Result<()> {
        std::process::Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to execute open command '{}'", self.program))?;

        Ok(())
    }
}
