//! Bookmark TUI Library
//!
//! Exposes modules for testing

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod storage;
pub mod utils;
