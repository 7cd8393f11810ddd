use super::config::Config;
use super::keymap::KeyMap;
use crate::domain::models::Route;
use crate::theme::Theme;
use ratatui::layout::Rect;
use std::sync::Arc;

pub mod input;
pub mod overlay;
pub mod search;

// Re-exports
pub use input::AppTextArea;
pub use overlay::{Anchor, Overlay, Picked, SearchHits};
pub use search::{SearchState, SearchTicket};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Search, // Keystrokes edit the query
    Page,   // Keystrokes go to the global keymap
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub focus: Focus,
    pub status_message: Option<String>, // "No results for ..."

    // --- Search widget ---
    pub search: SearchState<'a>,

    // --- Navigation ---
    pub location: Route,
    pub history: Vec<Route>,

    // --- Layout ---
    pub viewport: Rect,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub config: Config,
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            theme: Theme::from_palette_type(config.theme),
            config,
            ..Default::default()
        }
    }

    pub fn min_query_len(&self) -> usize {
        self.config.search.min_query_len
    }

    pub fn navigate(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.location, route);
        self.history.push(previous);
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let config = Config::default();
        Self {
            should_quit: false,
            focus: Focus::Search,
            status_message: None,
            search: SearchState::default(),
            location: Route::default(),
            history: Vec::new(),
            viewport: Rect::new(0, 0, 80, 24),
            frame_count: 0,
            theme: Theme::from_palette_type(config.theme),
            config,
            keymap: Arc::new(KeyMap::default()),
        }
    }
}
