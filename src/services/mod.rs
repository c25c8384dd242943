//! External Services
//!
//! This module contains services that interact with external systems:
//! - loader: Background bookmark tree fetches

pub mod loader;

// Re-export commonly used types for convenience
pub use loader::{LoaderRequest, LoaderResponse};
