//! Playback control methods

use crate::resolver::ResolvedMedia;

use super::AppController;

impl AppController {
    /// Hand a clip to the audio backend and record it as the single active
    /// selection. The backend stops any previous player first.
    pub async fn play_clip(&self, article: &str, media: ResolvedMedia) {
        let mut backend_guard = self.audio_backend.lock().await;
        match backend_guard.as_mut() {
            Some(backend) => match backend.play(&media.url).await {
                Ok(()) => {
                    tracing::info!(article, url = %media.url, "playback started");
                    drop(backend_guard);
                    let model = self.model.lock().await;
                    model.set_now_playing(article.to_string(), media).await;
                }
                Err(e) => {
                    tracing::error!(article, error = %e, "playback failed");
                    drop(backend_guard);
                    let model = self.model.lock().await;
                    model.set_error(format!("Playback failed: {}", e)).await;
                }
            },
            None => {
                drop(backend_guard);
                let model = self.model.lock().await;
                model
                    .set_error("Audio player is still starting up, try again".to_string())
                    .await;
            }
        }
    }

    pub async fn stop_playback(&self) {
        let mut backend_guard = self.audio_backend.lock().await;
        if let Some(backend) = backend_guard.as_mut() {
            backend.stop().await;
        }
        drop(backend_guard);

        let model = self.model.lock().await;
        model.set_stopped().await;
    }

    /// Notice when the external player finishes a clip so the status bar
    /// stops advancing. Called periodically from the main loop.
    pub async fn poll_playback(&self) {
        let active = {
            let mut backend_guard = self.audio_backend.lock().await;
            backend_guard
                .as_mut()
                .map(|backend| backend.is_active())
                .unwrap_or(false)
        };

        let model = self.model.lock().await;
        if !active && model.is_playing().await {
            tracing::debug!("player exited, clearing playing state");
            model.set_stopped().await;
        }
    }

    /// Play the clip under the cursor in the results view.
    pub async fn play_selected(&self) {
        let selected = {
            let model = self.model.lock().await;
            model.get_selected_clip().await
        };

        if let Some((article, media)) = selected {
            self.play_clip(&article, media).await;
        }
    }

    /// Play the selected featured clip from the sidebar.
    pub async fn play_selected_featured(&self) {
        let selected = {
            let model = self.model.lock().await;
            model.get_selected_featured().await
        };

        if let Some(item) = selected {
            self.play_clip(&item.article, item.media).await;
        }
    }
}
