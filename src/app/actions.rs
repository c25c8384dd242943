//! Row action orchestration methods
//!
//! Methods triggered by activating rows:
//! - Opening bookmarks in a new tab and toggling folders
//! - Pin/unpin through a row's affordance
//! - Expanding/collapsing the selected folder
//! - Dispatching mouse clicks to the row under the cursor

use crate::logic::errors::{format_error_chain, format_error_message};
use crate::logic::layout;
use crate::logic::tree::{PinAction, Row};
use crate::App;

impl App {
    /// Activate a row: folders toggle, everything with a url opens it
    pub(crate) fn activate_row(&mut self, index: usize) {
        if !self.model.select_index(index) {
            return;
        }
        let Some(row) = self.model.selected_row() else {
            return;
        };

        match &row {
            Row::Folder { id, .. } => self.model.toggle_folder(id),
            _ => {
                if let Some(url) = row.url() {
                    self.open_url(url);
                }
            }
        }
    }

    pub(crate) fn activate_selected(&mut self) {
        if let Some(index) = self.model.ui.selected_index {
            self.activate_row(index);
        }
    }

    /// Pin affordance of a row: bookmarks pin, pinned entries unpin
    pub(crate) fn activate_affordance(&mut self, index: usize) {
        if !self.model.select_index(index) {
            return;
        }
        let Some(row) = self.model.selected_row() else {
            return;
        };
        let (Some(action), Some(id)) = (row.pin_action(), row.id()) else {
            return;
        };

        match action {
            PinAction::Pin => self.pin_bookmark(id),
            PinAction::Unpin => self.unpin_bookmark(id),
        }
    }

    pub(crate) fn toggle_pin_selected(&mut self) {
        if let Some(index) = self.model.ui.selected_index {
            self.activate_affordance(index);
        }
    }

    pub(crate) fn expand_selected(&mut self) {
        if let Some(Row::Folder { id, .. }) = self.model.selected_row() {
            self.model.expand_folder(&id);
        }
    }

    pub(crate) fn collapse_selected(&mut self) {
        if let Some(Row::Folder { id, .. }) = self.model.selected_row() {
            self.model.collapse_folder(&id);
        }
    }

    /// Left click at a terminal position; only the row under the cursor reacts
    pub(crate) fn click_at(&mut self, column: u16, row: u16) {
        let Some(list_area) = self.model.ui.list_area else {
            return;
        };
        let row_count = self.model.visible_rows().len();
        let Some(hit) = layout::hit_test(list_area, self.model.ui.list_offset, row_count, column, row)
        else {
            return;
        };

        let has_affordance = self
            .model
            .visible_rows()
            .get(hit.index)
            .and_then(Row::pin_action)
            .is_some();

        if hit.on_affordance && has_affordance {
            self.activate_affordance(hit.index);
        } else {
            self.activate_row(hit.index);
        }
    }

    /// Open a url in a new browser tab (fire-and-forget)
    pub(crate) fn open_url(&mut self, url: &str) {
        match self.opener.open_in_new_tab(url) {
            Ok(()) => {
                crate::log_debug(&format!("DEBUG [Open]: {}", url));
                self.model.show_toast(format!("Opened: {}", url));
            }
            Err(e) => {
                crate::log_debug(&format!(
                    "DEBUG [Open]: failed to open {}: {}",
                    url,
                    format_error_chain(&e)
                ));
                self.model
                    .show_toast(format!("Error: {}", format_error_message(&e)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::app::test_support::*;
    use crate::logic::tree::Row;

    #[test]
    fn test_activate_bookmark_opens_url() {
        let mut harness = loaded_harness();
        let index = harness.row_index("Home");
        harness.app.activate_row(index);
        assert_eq!(*harness.opener.opened.borrow(), vec!["http://h".to_string()]);
    }

    #[test]
    fn test_activate_folder_toggles_without_opening() {
        let mut harness = loaded_harness();
        let index = harness.row_index("Docs");
        harness.app.activate_row(index);
        assert!(harness.app.model.ui.tree_state.is_expanded("10"));
        assert!(harness.opener.opened.borrow().is_empty());

        harness.app.activate_row(index);
        assert!(!harness.app.model.ui.tree_state.is_expanded("10"));
    }

    #[test]
    fn test_child_folder_toggle_leaves_parent_expanded() {
        let mut harness = loaded_harness();
        harness.app.activate_row(harness.row_index("Docs"));
        harness.app.activate_row(harness.row_index("Guides"));
        assert!(harness.app.model.ui.tree_state.is_expanded("10"));
        assert!(harness.app.model.ui.tree_state.is_expanded("11"));

        harness.app.activate_row(harness.row_index("Guides"));
        assert!(harness.app.model.ui.tree_state.is_expanded("10"));
        assert!(!harness.app.model.ui.tree_state.is_expanded("11"));
    }

    #[test]
    fn test_search_result_opens_url() {
        let mut harness = loaded_harness();
        harness.app.set_query("api".to_string());
        harness.app.activate_row(0);
        assert_eq!(*harness.opener.opened.borrow(), vec!["http://a".to_string()]);
    }

    #[test]
    fn test_search_result_has_no_pin_affordance() {
        let mut harness = loaded_harness();
        harness.app.set_query("api".to_string());
        harness.app.activate_affordance(0);
        assert!(harness.app.model.bookmarks.pinned.is_empty());
    }

    #[test]
    fn test_click_row_versus_affordance() {
        let mut harness = loaded_harness();
        harness.app.model.ui.list_area = Some(Rect::new(0, 0, 30, 10));
        harness.app.model.ui.list_offset = 0;
        let home = harness.row_index("Home") as u16;

        // Click on the title opens
        harness.app.click_at(3, 1 + home);
        assert_eq!(harness.opener.opened.borrow().len(), 1);
        assert!(harness.app.model.bookmarks.pinned.is_empty());

        // Click on the last inner column pins instead of opening
        harness.app.click_at(28, 1 + home);
        assert!(harness.app.model.bookmarks.pinned.contains("2"));
        assert_eq!(harness.opener.opened.borrow().len(), 1);
    }

    #[test]
    fn test_click_on_pinned_affordance_unpins() {
        let mut harness = loaded_harness();
        harness.app.pin_bookmark("2");
        harness.deliver(Some(sample_root()));
        assert_eq!(harness.app.model.visible_rows()[1].label(), "Home ★");

        harness.app.model.ui.list_area = Some(Rect::new(0, 0, 30, 10));
        harness.app.click_at(28, 2);
        assert!(harness.app.model.bookmarks.pinned.is_empty());
    }

    #[test]
    fn test_click_on_pinned_header_does_nothing() {
        let mut harness = loaded_harness();
        harness.app.pin_bookmark("2");
        harness.deliver(Some(sample_root()));

        harness.app.model.ui.list_area = Some(Rect::new(0, 0, 30, 10));
        harness.app.click_at(3, 1);
        assert_eq!(harness.app.model.visible_rows()[0], Row::PinnedHeader);
        assert!(harness.opener.opened.borrow().is_empty());
        assert_eq!(harness.app.model.bookmarks.pinned.len(), 1);
    }

    #[test]
    fn test_expand_and_collapse_selected() {
        let mut harness = loaded_harness();
        harness.app.model.select_index(harness.row_index("Docs"));
        harness.app.expand_selected();
        assert!(harness.app.model.ui.tree_state.is_expanded("10"));
        harness.app.collapse_selected();
        assert!(!harness.app.model.ui.tree_state.is_expanded("10"));
    }
}
