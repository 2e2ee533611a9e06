use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use wikitunes::audio::AudioBackend;
use wikitunes::controller::AppController;
use wikitunes::logging;
use wikitunes::model::AppModel;
use wikitunes::resolver::{Resolver, WikiClient};
use wikitunes::view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== wikitunes starting ===");

    let resolver = Resolver::new(WikiClient::new());

    let model = Arc::new(Mutex::new(AppModel::new()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let audio_backend: Arc<Mutex<Option<AudioBackend>>> = Arc::new(Mutex::new(None));

    // Probe for a media player in the background so startup never blocks on it
    let audio_backend_init = audio_backend.clone();
    let model_for_init = model.clone();
    tokio::spawn(async move {
        match AudioBackend::new().await {
            Ok(backend) => {
                tracing::info!(player = backend.player_name(), "audio backend ready");
                *audio_backend_init.lock().await = Some(backend);
            }
            Err(e) => {
                tracing::error!(error = %e, "audio backend init failed");
                let model = model_for_init.lock().await;
                model.set_error(format!("Audio init failed: {}", e)).await;
            }
        }
    });

    let controller = AppController::new(model.clone(), audio_backend.clone(), resolver);

    // Load the featured clips in the background
    let controller_for_featured = controller.clone();
    tokio::spawn(async move {
        controller_for_featured.load_featured().await;
    });

    tracing::info!("Starting TUI...");

    let res = run_app(&mut terminal, model.clone(), controller.clone()).await;

    // Make sure no external player outlives the UI
    controller.stop_playback().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("wikitunes shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    // Notice finished clips without busy-polling the child every frame
    let mut last_playback_poll = std::time::Instant::now();
    const PLAYBACK_POLL_INTERVAL: Duration = Duration::from_millis(500);

    loop {
        if last_playback_poll.elapsed() >= PLAYBACK_POLL_INTERVAL {
            last_playback_poll = std::time::Instant::now();
            controller.poll_playback().await;
        }

        // Get current state
        let (playback, ui_state, content_state, should_quit) = {
            let model_guard = model.lock().await;

            // Auto-clear old errors (after 5 seconds)
            model_guard.auto_clear_old_errors().await;

            (
                model_guard.get_playback().await,
                model_guard.get_ui_state().await,
                model_guard.get_content_state().await,
                model_guard.should_quit().await,
            )
        };

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &playback, &ui_state, &content_state);
        })?;

        // Handle input with shorter poll time for smoother UI updates
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
