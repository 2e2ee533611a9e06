//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Main layout structure (top bar, featured sidebar)
//! - `content`: Main content area rendering
//! - `playback`: Playback status bar rendering
//! - `overlays`: Modal overlays (error, help)

mod content;
mod layout;
mod overlays;
mod playback;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ContentState, PlaybackState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        playback: &PlaybackState,
        ui_state: &UiState,
        content_state: &ContentState,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + source
                Constraint::Min(0),    // Main content (sidebar + results)
                Constraint::Length(3), // Playback status bar
            ])
            .split(frame.area());

        // Top bar: Search + Source
        layout::render_top_bar(frame, chunks[0], ui_state);

        // Middle: Featured sidebar and results
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // Featured sidebar
                Constraint::Percentage(70), // Results
            ])
            .split(chunks[1]);

        layout::render_featured_sidebar(frame, main_chunks[0], ui_state);
        content::render_main_content(frame, main_chunks[1], ui_state, content_state, playback);

        // Bottom: playback status
        playback::render_playback_bar(frame, chunks[2], playback);

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
