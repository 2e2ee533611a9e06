//! Playback selection state
//!
//! At most one clip is "current" at any time. Playing a new clip replaces
//! the selection wholesale; the audio backend stops the previous player as
//! part of the same action. Elapsed time for the status bar is derived from
//! the instant the selection was made, since the external player does not
//! report position.

use std::time::Instant;

use crate::resolver::ResolvedMedia;

/// The single active playback selection
#[derive(Clone, Debug)]
pub struct NowPlaying {
    pub article: String,
    pub media: ResolvedMedia,
    pub started: Instant,
}

/// Playback state snapshot handed to the view
#[derive(Clone, Debug, Default)]
pub struct PlaybackState {
    pub current: Option<NowPlaying>,
    pub is_playing: bool,
}

impl PlaybackState {
    pub fn elapsed_ms(&self) -> u32 {
        self.current
            .as_ref()
            .map(|now| now.started.elapsed().as_millis() as u32)
            .unwrap_or(0)
    }
}
