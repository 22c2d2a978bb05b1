//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use wiki_storage::Storage;

use crate::templates::Templates;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page store.
    pub(crate) storage: Arc<dyn Storage>,
    /// Compiled view and edit templates.
    pub(crate) templates: Templates,
}
