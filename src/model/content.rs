//! Content view state for the main area

use crate::resolver::ResultEntry;

/// Represents the current view in the main content area
#[derive(Clone, Debug, Default)]
pub enum ContentView {
    #[default]
    Empty,
    /// Search results: articles with playable clips. `entry_index` selects
    /// the article, `file_index` the clip within it.
    Results {
        query: String,
        entries: Vec<ResultEntry>,
        entry_index: usize,
        file_index: usize,
    },
    /// The search itself succeeded but no article had a playable clip.
    /// Deliberately distinct from the error overlay.
    NoResults { query: String },
}

/// State for the main content area
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub view: ContentView,
    pub is_loading: bool,
}
