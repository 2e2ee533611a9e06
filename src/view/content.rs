//! Main content area rendering (result entries and their clips)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, ContentState, ContentView, PlaybackState, UiState};
use crate::resolver::ResultEntry;

use super::utils::{calculate_num_width, render_scrollable_list, truncate_string};

pub fn render_main_content(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
    playback: &PlaybackState,
) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    if content_state.is_loading {
        let loading = Paragraph::new("Searching...")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .border_style(border_style),
            );
        frame.render_widget(loading, area);
        return;
    }

    match &content_state.view {
        ContentView::Empty => {
            let content = Paragraph::new(
                "Type in search and press Enter to find songs with audio clips\n\n\
                 Use Tab to navigate between sections\n\
                 Use ↑/↓ to pick an article, ←/→ to pick a clip\n\
                 Press Enter to play",
            )
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
            frame.render_widget(content, area);
        }
        ContentView::NoResults { query } => {
            // Explicit state, distinct from the error overlay: the search
            // worked, there is just nothing playable.
            let content = Paragraph::new(format!(
                "No articles with playable audio for \"{}\"",
                query
            ))
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
            frame.render_widget(content, area);
        }
        ContentView::Results {
            query,
            entries,
            entry_index,
            file_index,
        } => {
            render_results(
                frame,
                area,
                query,
                entries,
                *entry_index,
                *file_index,
                is_focused,
                playback,
            );
        }
    }
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    entries: &[ResultEntry],
    entry_index: usize,
    file_index: usize,
    is_focused: bool,
    playback: &PlaybackState,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Article list
            Constraint::Length(7), // Clips of the selected article
        ])
        .split(area);

    let content_width = chunks[0].width.saturating_sub(4) as usize;
    let num_width = calculate_num_width(entries.len());

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = i == entry_index;
            let style = if is_selected && is_focused {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let clips = entry.audio_files.len();
            let clip_label = if clips == 1 {
                "1 clip".to_string()
            } else {
                format!("{} clips", clips)
            };
            let title_width = content_width.saturating_sub(num_width + 12);
            let line = format!(
                "{:>num_width$}  {}  {}",
                i + 1,
                truncate_string(&entry.hit.title, title_width),
                clip_label,
            );
            ListItem::new(line).style(style)
        })
        .collect();

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results for \"{}\" ", query))
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, chunks[0], items, entry_index, list_block);

    render_clips_panel(
        frame,
        chunks[1],
        entries.get(entry_index),
        file_index,
        is_focused,
        playback,
    );
}

fn render_clips_panel(
    frame: &mut Frame,
    area: Rect,
    entry: Option<&ResultEntry>,
    file_index: usize,
    is_focused: bool,
    playback: &PlaybackState,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Clips (←/→ to pick, Enter to play) ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    let Some(entry) = entry else {
        frame.render_widget(
            Paragraph::new("")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let playing_url = playback
        .current
        .as_ref()
        .filter(|_| playback.is_playing)
        .map(|now| now.media.url.as_str());

    let mut lines: Vec<Line> = Vec::new();

    // Snippets arrive from the resolver already reduced to plain text
    if let Some(snippet) = &entry.hit.snippet {
        let width = area.width.saturating_sub(4) as usize;
        lines.push(Line::from(Span::styled(
            truncate_string(snippet, width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.extend(entry.audio_files.iter().enumerate().map(|(i, media)| {
        let is_selected = i == file_index;
        let is_playing = playing_url == Some(media.url.as_str());

        let marker = if is_playing { "▶" } else { "♪" };
        let name = media.title.trim_start_matches("File:");
        let mime = media.mime_type.as_deref().unwrap_or("unknown");

        let style = if is_selected && is_focused {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if is_playing {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };

        Line::from(Span::styled(
            format!("{} {}  [{}]", marker, name, mime),
            style,
        ))
    }));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
