//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error message extraction for toasts and the debug log
//! - formatting: Dates and width-aware truncation
//! - layout: Row indentation and mouse hit testing
//! - navigation: Selection movement over visible rows
//! - pinned: The persisted pinned set
//! - platform: Browser profile locations and the default open command
//! - search: Flattening the tree and substring filtering
//! - tree: Building visible rows from the tree and expand state
//! - ui: UI state transitions

pub mod errors;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod pinned;
pub mod platform;
pub mod search;
pub mod tree;
pub mod ui;
