//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model, the resolver and the audio backend.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Search submission and featured-clip loading
//! - `playback`: Playback control via the audio backend

mod input;
mod playback;
mod search;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::audio::AudioBackend;
use crate::model::AppModel;
use crate::resolver::{ResolveError, Resolver};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) audio_backend: Arc<Mutex<Option<AudioBackend>>>,
    pub(crate) resolver: Resolver,
}

impl AppController {
    pub fn new(
        model: Arc<Mutex<AppModel>>,
        audio_backend: Arc<Mutex<Option<AudioBackend>>>,
        resolver: Resolver,
    ) -> Self {
        Self {
            model,
            audio_backend,
            resolver,
        }
    }

    pub(crate) fn format_error(error: &ResolveError) -> String {
        match error {
            ResolveError::SearchUnavailable(cause) => {
                format!("Search unavailable: {}", cause)
            }
        }
    }
}
