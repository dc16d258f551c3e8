//! Application state for the web server.

use std::sync::Arc;

use brigade::MenuDataset;

use crate::config::DefaultsConfig;

/// Shared application state.
///
/// The menu is loaded once and never modified; every request filters its
/// own view of it.
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<MenuDataset>,
    /// Values used for query parameters a request leaves out.
    pub defaults: Arc<DefaultsConfig>,
}

impl AppState {
    pub fn new(menu: MenuDataset, defaults: DefaultsConfig) -> Self {
        Self {
            menu: Arc::new(menu),
            defaults: Arc::new(defaults),
        }
    }
}
