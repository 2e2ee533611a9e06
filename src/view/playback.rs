//! Playback status bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::PlaybackState;

use super::utils::format_duration;

pub fn render_playback_bar(frame: &mut Frame, area: Rect, playback: &PlaybackState) {
    let (status_text, style) = match &playback.current {
        None => (
            " Nothing playing".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(now) => {
            let file = now.media.title.trim_start_matches("File:");
            if playback.is_playing {
                (
                    format!(
                        " ▶ {} | {}  [{}]",
                        now.article,
                        file,
                        format_duration(playback.elapsed_ms())
                    ),
                    Style::default().fg(Color::Green),
                )
            } else {
                (
                    format!(" ⏹ {} | {}", now.article, file),
                    Style::default().fg(Color::DarkGray),
                )
            }
        }
    };

    let hints = " Enter: play | S: stop | H: help | Q: quit ";

    let bar = Paragraph::new(status_text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Now Playing ")
            .title_bottom(Line::from(hints).right_aligned()),
    );

    frame.render_widget(bar, area);
}
