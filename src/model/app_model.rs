//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::resolver::{ResolvedMedia, ResultEntry};

use super::content::{ContentState, ContentView};
use super::playback::{NowPlaying, PlaybackState};
use super::types::{ActiveSection, FeaturedItem, UiState};

const ERROR_DISPLAY_SECS: u64 = 5;

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    playback: Arc<Mutex<PlaybackState>>,
    /// Monotonically increasing search generation. A resolve completion may
    /// only commit while it still holds the newest token, which is how a
    /// superseded search's late results get discarded.
    search_generation: Arc<Mutex<u64>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            ui_state: Arc::new(Mutex::new(UiState::default())),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            playback: Arc::new(Mutex::new(PlaybackState::default())),
            search_generation: Arc::new(Mutex::new(0)),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // Snapshots for rendering
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    pub async fn get_playback(&self) -> PlaybackState {
        self.playback.lock().await.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Section focus & search input
    // ========================================================================

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn update_search_query(&self, query: String) {
        let mut state = self.ui_state.lock().await;
        state.search_query = query;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
    }

    // ========================================================================
    // Search lifecycle (generation-tokened commits)
    // ========================================================================

    pub async fn is_loading(&self) -> bool {
        self.content_state.lock().await.is_loading
    }

    /// Start a new search: bump the generation and flag loading. Returns the
    /// token the eventual completion must present to commit.
    pub async fn begin_search(&self) -> u64 {
        let mut generation = self.search_generation.lock().await;
        *generation += 1;
        let mut state = self.content_state.lock().await;
        state.is_loading = true;
        *generation
    }

    /// Replace the displayed results wholesale. Returns false (and changes
    /// nothing) when a newer search has started since `generation` was
    /// handed out.
    pub async fn commit_results(
        &self,
        generation: u64,
        query: String,
        entries: Vec<ResultEntry>,
    ) -> bool {
        if self.is_stale(generation).await {
            tracing::debug!(generation, query = %query, "discarding stale search results");
            return false;
        }

        let mut state = self.content_state.lock().await;
        state.view = if entries.is_empty() {
            ContentView::NoResults { query }
        } else {
            ContentView::Results {
                query,
                entries,
                entry_index: 0,
                file_index: 0,
            }
        };
        state.is_loading = false;
        true
    }

    /// Record a failed search. The displayed list is replaced wholesale on
    /// failure too, so no stale results linger behind the error popup.
    /// Stale failures are dropped like stale results.
    pub async fn commit_failure(&self, generation: u64, message: String) -> bool {
        if self.is_stale(generation).await {
            tracing::debug!(generation, "discarding stale search failure");
            return false;
        }

        let mut state = self.content_state.lock().await;
        state.view = ContentView::Empty;
        state.is_loading = false;
        drop(state);

        self.set_error(message).await;
        true
    }

    async fn is_stale(&self, generation: u64) -> bool {
        *self.search_generation.lock().await != generation
    }

    // ========================================================================
    // Errors & overlays
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > ERROR_DISPLAY_SECS {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Featured sidebar
    // ========================================================================

    pub async fn set_featured_loading(&self, loading: bool) {
        let mut state = self.ui_state.lock().await;
        state.featured_loading = loading;
    }

    pub async fn set_featured(&self, items: Vec<FeaturedItem>) {
        let mut state = self.ui_state.lock().await;
        state.featured = items;
        state.featured_selected = 0;
        state.featured_loading = false;
    }

    pub async fn get_selected_featured(&self) -> Option<FeaturedItem> {
        let state = self.ui_state.lock().await;
        state.featured.get(state.featured_selected).cloned()
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.active_section == ActiveSection::Featured && state.featured_selected > 0 {
            state.featured_selected -= 1;
        }
    }

    pub async fn move_selection_down(&self) {
        let mut state = self.ui_state.lock().await;
        if state.active_section == ActiveSection::Featured
            && state.featured_selected < state.featured.len().saturating_sub(1)
        {
            state.featured_selected += 1;
        }
    }

    // ========================================================================
    // Results navigation
    // ========================================================================

    pub async fn content_move_up(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::Results {
            entry_index,
            file_index,
            ..
        } = &mut state.view
        {
            if *entry_index > 0 {
                *entry_index -= 1;
                *file_index = 0;
            }
        }
    }

    pub async fn content_move_down(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::Results {
            entries,
            entry_index,
            file_index,
            ..
        } = &mut state.view
        {
            if *entry_index < entries.len().saturating_sub(1) {
                *entry_index += 1;
                *file_index = 0;
            }
        }
    }

    pub async fn content_move_left(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::Results { file_index, .. } = &mut state.view {
            if *file_index > 0 {
                *file_index -= 1;
            }
        }
    }

    pub async fn content_move_right(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::Results {
            entries,
            entry_index,
            file_index,
            ..
        } = &mut state.view
        {
            let clip_count = entries
                .get(*entry_index)
                .map(|e| e.audio_files.len())
                .unwrap_or(0);
            if *file_index < clip_count.saturating_sub(1) {
                *file_index += 1;
            }
        }
    }

    /// The clip under the cursor in the results view, with its article title.
    pub async fn get_selected_clip(&self) -> Option<(String, ResolvedMedia)> {
        let state = self.content_state.lock().await;
        if let ContentView::Results {
            entries,
            entry_index,
            file_index,
            ..
        } = &state.view
        {
            let entry = entries.get(*entry_index)?;
            let media = entry.audio_files.get(*file_index)?;
            return Some((entry.hit.title.clone(), media.clone()));
        }
        None
    }

    // ========================================================================
    // Playback selection
    // ========================================================================

    /// Replace the playback selection wholesale. The caller has already
    /// stopped the previous player via the audio backend.
    pub async fn set_now_playing(&self, article: String, media: ResolvedMedia) {
        let mut playback = self.playback.lock().await;
        playback.current = Some(NowPlaying {
            article,
            media,
            started: Instant::now(),
        });
        playback.is_playing = true;
    }

    pub async fn set_stopped(&self) {
        let mut playback = self.playback.lock().await;
        playback.is_playing = false;
    }

    pub async fn is_playing(&self) -> bool {
        self.playback.lock().await.is_playing
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::SearchHit;

    fn media(url: &str) -> ResolvedMedia {
        ResolvedMedia {
            title: "File:clip.ogg".to_string(),
            url: url.to_string(),
            mime_type: Some("audio/ogg".to_string()),
        }
    }

    fn entry(title: &str, clips: usize) -> ResultEntry {
        ResultEntry {
            hit: SearchHit {
                page_id: 1,
                title: title.to_string(),
                snippet: None,
            },
            audio_files: (0..clips)
                .map(|i| media(&format!("https://host/{title}/{i}.ogg")))
                .collect(),
        }
    }

    #[tokio::test]
    async fn stale_results_are_discarded() {
        let model = AppModel::new();
        let first = model.begin_search().await;
        let second = model.begin_search().await;

        // The older search finishes late; it must not commit.
        assert!(
            !model
                .commit_results(first, "old".to_string(), vec![entry("Old", 1)])
                .await
        );
        assert!(matches!(
            model.get_content_state().await.view,
            ContentView::Empty
        ));

        assert!(
            model
                .commit_results(second, "new".to_string(), vec![entry("New", 1)])
                .await
        );
        match model.get_content_state().await.view {
            ContentView::Results { entries, .. } => assert_eq!(entries[0].hit.title, "New"),
            view => panic!("unexpected view: {view:?}"),
        }
    }

    #[tokio::test]
    async fn stale_failure_does_not_raise_error() {
        let model = AppModel::new();
        let first = model.begin_search().await;
        let _second = model.begin_search().await;

        assert!(!model.commit_failure(first, "boom".to_string()).await);
        assert!(!model.has_error().await);
    }

    #[tokio::test]
    async fn empty_commit_becomes_no_results() {
        let model = AppModel::new();
        let generation = model.begin_search().await;
        assert!(
            model
                .commit_results(generation, "obscure".to_string(), vec![])
                .await
        );
        let state = model.get_content_state().await;
        assert!(!state.is_loading);
        assert!(matches!(state.view, ContentView::NoResults { .. }));
    }

    #[tokio::test]
    async fn playback_selection_is_replaced_wholesale() {
        let model = AppModel::new();
        model
            .set_now_playing("First".to_string(), media("https://host/a.ogg"))
            .await;
        model
            .set_now_playing("Second".to_string(), media("https://host/b.ogg"))
            .await;

        let playback = model.get_playback().await;
        let now = playback.current.expect("selection set");
        assert_eq!(now.article, "Second");
        assert_eq!(now.media.url, "https://host/b.ogg");
        assert!(playback.is_playing);
    }

    #[tokio::test]
    async fn clip_cursor_clamps_to_entry_bounds() {
        let model = AppModel::new();
        let generation = model.begin_search().await;
        model
            .commit_results(
                generation,
                "q".to_string(),
                vec![entry("A", 2), entry("B", 1)],
            )
            .await;

        model.content_move_right().await;
        model.content_move_right().await; // clamped at the last clip
        let (_, selected) = model.get_selected_clip().await.unwrap();
        assert_eq!(selected.url, "https://host/A/1.ogg");

        // Moving to another entry resets the clip cursor.
        model.content_move_down().await;
        let (article, selected) = model.get_selected_clip().await.unwrap();
        assert_eq!(article, "B");
        assert_eq!(selected.url, "https://host/B/0.ogg");

        model.content_move_down().await; // clamped at the last entry
        let (article, _) = model.get_selected_clip().await.unwrap();
        assert_eq!(article, "B");
    }
}
