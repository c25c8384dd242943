//! Pinned bookmark management
//!
//! Methods for the pinned set:
//! - Pin a tree bookmark (duplicates ignored)
//! - Unpin an entry
//! - Persist after every change, toasting the outcome

use crate::logic::errors::{format_error_chain, format_error_message};
use crate::App;

impl App {
    /// Pin a tree bookmark, persist the set, and re-render
    ///
    /// Pinning an id that is already pinned changes nothing.
    pub(crate) fn pin_bookmark(&mut self, bookmark_id: &str) {
        if !self.model.pin(bookmark_id) {
            return;
        }

        let title = self
            .model
            .bookmarks
            .pinned
            .get(bookmark_id)
            .map(|node| node.title.clone())
            .unwrap_or_default();
        crate::log_debug(&format!("DEBUG [Pins]: pinned {} ({})", bookmark_id, title));

        if self.persist_pinned() {
            self.model.show_toast(format!("Pinned: {}", title));
        }
        self.rerender();
    }

    /// Remove a pinned entry by id, persist the set, and re-render
    pub(crate) fn unpin_bookmark(&mut self, bookmark_id: &str) {
        let title = self
            .model
            .bookmarks
            .pinned
            .get(bookmark_id)
            .map(|node| node.title.clone())
            .unwrap_or_default();

        if !self.model.unpin(bookmark_id) {
            return;
        }
        crate::log_debug(&format!("DEBUG [Pins]: unpinned {} ({})", bookmark_id, title));

        if self.persist_pinned() {
            self.model.show_toast(format!("Unpinned: {}", title));
        }
        self.rerender();
    }

    /// Write the whole pinned set; on failure the in-memory set is kept and an error toast shown
    fn persist_pinned(&mut self) -> bool {
        match self.model.bookmarks.pinned.persist(self.store.as_mut()) {
            Ok(()) => true,
            Err(e) => {
                crate::log_debug(&format!(
                    "DEBUG [Pins]: failed to persist pinned set: {}",
                    format_error_chain(&e)
                ));
                self.model
                    .show_toast(format!("Error: {}", format_error_message(&e)));
                false
            }
        }
    }
}
