//! Tree loader service
//!
//! Fetches the full bookmark tree off the UI loop. Each request is served by
//! its own task; nothing is deduplicated or cancelled, and responses arrive in
//! completion order.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::api::{BookmarkNode, BookmarkStore};
use crate::logic::errors::format_error_chain;

/// Loader request types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderRequest {
    /// Fetch the whole tree
    FetchTree,
}

/// Loader response types
#[derive(Debug)]
pub enum LoaderResponse {
    /// Root of the tree, or `None` if the store is empty, malformed or unreadable
    TreeLoaded { root: Option<BookmarkNode> },
}

/// Run one fetch; store errors are logged and reported as an absent tree
async fn fetch_tree(store: Arc<dyn BookmarkStore>) -> Option<BookmarkNode> {
    let started = Instant::now();
    let result = tokio::task::spawn_blocking(move || store.get_tree()).await;

    match result {
        Ok(Ok(root)) => {
            crate::log_debug(&format!(
                "DEBUG [Loader]: tree fetched in {}ms (present={})",
                started.elapsed().as_millis(),
                root.is_some()
            ));
            root
        }
        Ok(Err(e)) => {
            crate::log_debug(&format!(
                "DEBUG [Loader]: tree fetch failed: {}",
                format_error_chain(&e)
            ));
            None
        }
        Err(join_err) => {
            crate::log_debug(&format!("DEBUG [Loader]: fetch task panicked: {}", join_err));
            None
        }
    }
}

/// Spawn the loader service worker
pub fn spawn_loader_service(
    store: Arc<dyn BookmarkStore>,
) -> (
    mpsc::UnboundedSender<LoaderRequest>,
    mpsc::UnboundedReceiver<LoaderResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<LoaderRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<LoaderResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            match request {
                LoaderRequest::FetchTree => {
                    let store = store.clone();
                    let response_tx = response_tx.clone();
                    tokio::spawn(async move {
                        let root = fetch_tree(store).await;
                        let _ = response_tx.send(LoaderResponse::TreeLoaded { root });
                    });
                }
            }
        }
    });

    (request_tx, response_rx)
}
