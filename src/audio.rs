//! Audio backend delegating playback to the platform's media player.
//!
//! Decoding, output, seeking and volume are the player's business; this
//! module only enforces the single-active-player rule: starting a clip kills
//! whatever was playing before it. Candidate players are probed in priority
//! order at startup and the first one present is used for the whole session.

use std::process::Stdio;

use anyhow::{anyhow, Result};
use tokio::process::{Child, Command};

/// Players probed in order. Each entry: binary, probe flag, playback args.
const PLAYER_CANDIDATES: &[(&str, &str, &[&str])] = &[
    ("mpv", "--version", &["--no-video", "--really-quiet"]),
    (
        "ffplay",
        "-version",
        &["-nodisp", "-autoexit", "-loglevel", "quiet"],
    ),
];

pub struct AudioBackend {
    player: &'static str,
    play_args: &'static [&'static str],
    child: Option<Child>,
}

impl AudioBackend {
    /// Find a usable media player. Fails only when none of the candidates
    /// is installed.
    pub async fn new() -> Result<Self> {
        for &(binary, probe_flag, play_args) in PLAYER_CANDIDATES {
            let probe = Command::new(binary)
                .arg(probe_flag)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await;

            match probe {
                Ok(status) if status.success() => {
                    tracing::debug!(player = binary, "media player found");
                    return Ok(Self {
                        player: binary,
                        play_args,
                        child: None,
                    });
                }
                Ok(status) => {
                    tracing::debug!(player = binary, code = ?status.code(), "probe rejected");
                }
                Err(e) => {
                    tracing::debug!(player = binary, error = %e, "probe failed");
                }
            }
        }
        Err(anyhow!(
            "no supported media player found (tried mpv, ffplay)"
        ))
    }

    /// Play a clip by URL, replacing any active player.
    pub async fn play(&mut self, url: &str) -> Result<()> {
        self.stop().await;

        let child = Command::new(self.player)
            .args(self.play_args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        tracing::debug!(player = self.player, url, "player spawned");
        self.child = Some(child);
        Ok(())
    }

    /// Kill the active player, if any.
    pub async fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill().await {
                tracing::warn!(error = %e, "failed to kill player process");
            }
        }
    }

    /// Whether the player process is still running. Players exit on their
    /// own when a clip ends, which is how the UI notices playback finished.
    pub fn is_active(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    pub fn player_name(&self) -> &'static str {
        self.player
    }
}
