//! Application state management.

pub mod player;

pub use player::SignalStore;

use std::sync::Arc;

use helloa_core::SiteContent;

/// Global application state: the content loaded at startup.
///
/// Per-page UI state (player, menu, accordion) lives in the components
/// that own it.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
}

impl AppState {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }
}
