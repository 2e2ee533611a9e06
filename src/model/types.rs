//! Core type definitions for the application

use std::time::Instant;

use crate::resolver::ResolvedMedia;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Featured,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Featured,
            ActiveSection::Featured => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Featured => ActiveSection::Search,
            ActiveSection::Results => ActiveSection::Featured,
        }
    }
}

/// A trending clip resolved at startup for the sidebar
#[derive(Clone, Debug)]
pub struct FeaturedItem {
    pub article: String,
    pub media: ResolvedMedia,
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    pub featured: Vec<FeaturedItem>,
    pub featured_selected: usize,
    pub featured_loading: bool,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_query: String::new(),
            featured: vec![], // Loaded in the background at startup
            featured_selected: 0,
            featured_loading: false,
            error_message: None,
            error_timestamp: None,
            show_help_popup: false,
        }
    }
}
