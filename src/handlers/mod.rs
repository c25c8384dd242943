//! Event Handlers
//!
//! This module translates terminal events into App actions:
//! - keyboard: Search box editing, selection, open/pin hotkeys
//! - mouse: Row clicks, pin affordance clicks, wheel scrolling
//!
//! Handlers are plain functions that take &mut App; all state changes go
//! through App methods so they stay testable without a terminal.

pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
