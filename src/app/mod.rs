//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in src/model/)
//! - Collaborators (tree loader, tab opener, key-value store)
//! - Logic (pure business logic in src/logic/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod actions;
pub(crate) mod loading;
pub(crate) mod pins;
pub(crate) mod search;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::Result;
    use tokio::sync::mpsc;

    use crate::api::{BookmarkNode, TabOpener};
    use crate::logic::pinned::PinnedSet;
    use crate::services::{LoaderRequest, LoaderResponse};
    use crate::storage::{KvStore, MemoryStore};
    use crate::App;

    /// Opener that records every url instead of launching a browser
    #[derive(Clone, Default)]
    pub struct RecordingOpener {
        pub opened: Rc<RefCell<Vec<String>>>,
    }

    impl TabOpener for RecordingOpener {
        fn open_in_new_tab(&self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    /// Store whose writes always fail
    pub struct ReadOnlyStore;

    impl KvStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<serde_json::Value>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &serde_json::Value) -> Result<()> {
            anyhow::bail!("read-only file system")
        }
    }

    pub struct TestHarness {
        pub app: App,
        pub opener: RecordingOpener,
        pub requests: mpsc::UnboundedReceiver<LoaderRequest>,
        pub responses: mpsc::UnboundedSender<LoaderResponse>,
    }

    pub fn sample_root() -> BookmarkNode {
        BookmarkNode::folder(
            "0",
            "",
            vec![
                BookmarkNode::folder(
                    "10",
                    "Docs",
                    vec![
                        BookmarkNode::bookmark("1", "API", "http://a"),
                        BookmarkNode::folder("11", "Guides", vec![BookmarkNode::bookmark("3", "Intro", "http://i")]),
                    ],
                ),
                BookmarkNode::bookmark("2", "Home", "http://h"),
            ],
        )
    }

    pub fn harness_with_store(store: Box<dyn KvStore>) -> TestHarness {
        let opener = RecordingOpener::default();
        let (request_tx, requests) = mpsc::unbounded_channel();
        let (responses, response_rx) = mpsc::unbounded_channel();
        let pinned = PinnedSet::load(store.as_ref()).unwrap();
        let app = App::new(
            2,
            pinned,
            store,
            Box::new(opener.clone()),
            request_tx,
            response_rx,
        );
        TestHarness {
            app,
            opener,
            requests,
            responses,
        }
    }

    /// App with the sample tree already loaded and shown
    pub fn loaded_harness() -> TestHarness {
        let mut harness = harness_with_store(Box::new(MemoryStore::new()));
        harness.app.start();
        harness.deliver(Some(sample_root()));
        harness
    }

    impl TestHarness {
        /// Answer one pending fetch
        pub fn deliver(&mut self, root: Option<BookmarkNode>) {
            assert_eq!(self.requests.try_recv().ok(), Some(LoaderRequest::FetchTree));
            self.responses
                .send(LoaderResponse::TreeLoaded { root })
                .unwrap();
            self.app.process_loader_responses();
        }

        pub fn pending_requests(&mut self) -> usize {
            let mut count = 0;
            while self.requests.try_recv().is_ok() {
                count += 1;
            }
            count
        }

        pub fn row_index(&self, label: &str) -> usize {
            self.app
                .model
                .visible_rows()
                .iter()
                .position(|row| row.label() == label)
                .unwrap_or_else(|| panic!("no row labelled {}", label))
        }
    }
}
