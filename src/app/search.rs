//! Search box orchestration methods
//!
//! Methods for editing the query:
//! - Typing, deleting and clearing characters
//! - Full re-render from the current query

use crate::App;

impl App {
    /// Replace the search box value and re-derive the view
    pub(crate) fn set_query(&mut self, query: String) {
        if query == self.model.ui.search_query {
            return;
        }
        let effect = self.model.set_query(query);
        self.run_effect(effect);
    }

    pub(crate) fn push_query_char(&mut self, c: char) {
        let mut query = self.model.ui.search_query.clone();
        query.push(c);
        self.set_query(query);
    }

    pub(crate) fn pop_query_char(&mut self) {
        let mut query = self.model.ui.search_query.clone();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    pub(crate) fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Full re-render using the current search box value
    pub(crate) fn rerender(&mut self) {
        let effect = self.model.rerender();
        self.run_effect(effect);
    }
}
