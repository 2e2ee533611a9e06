//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (section focus, UI state, featured items)
//! - `content`: Main content area state (results, no-results, loading)
//! - `playback`: The single active playback selection
//! - `app_model`: Main application model with state management methods

mod app_model;
mod content;
mod playback;
mod types;

// Re-export all public types for convenient access
pub use types::{ActiveSection, FeaturedItem, UiState};

pub use content::{ContentState, ContentView};

pub use playback::{NowPlaying, PlaybackState};

pub use app_model::AppModel;
