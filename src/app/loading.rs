//! Tree loading orchestration methods
//!
//! Methods bridging the model and the loader service:
//! - Issuing the initial and follow-up tree fetches
//! - Running effects returned by model transitions
//! - Applying completed fetches

use crate::model::Effect;
use crate::services::{LoaderRequest, LoaderResponse};
use crate::App;

impl App {
    /// Issue the initial tree fetch
    pub(crate) fn start(&mut self) {
        self.request_tree();
    }

    pub(crate) fn request_tree(&mut self) {
        match self.loader_tx.send(LoaderRequest::FetchTree) {
            Ok(()) => self.model.fetch_sent(),
            Err(_) => crate::log_debug("DEBUG [App]: loader service is gone, fetch dropped"),
        }
    }

    /// Carry out I/O requested by a model transition
    pub(crate) fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchTree => self.request_tree(),
        }
    }

    /// Apply every completed fetch (non-blocking)
    pub(crate) fn process_loader_responses(&mut self) {
        while let Ok(response) = self.loader_rx.try_recv() {
            match response {
                LoaderResponse::TreeLoaded { root } => {
                    if root.is_none() {
                        crate::log_debug("DEBUG [App]: bookmark tree absent, nothing to render");
                    }
                    self.model.apply_tree(root);
                }
            }
        }
    }
}
