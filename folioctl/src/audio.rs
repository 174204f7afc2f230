//! Background-music toggle state machine.
//!
//! Playback itself sits behind the [`AudioSink`] trait so the toggle can
//! be driven without an audio stack. The shipped sink spawns an external
//! player process; a failed spawn is the "playback blocked" case and the
//! control shows a retry prompt.

use folio_core::{FolioError, Result};
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// Label shown while music is playing.
pub const LABEL_ON: &str = "🎵 Music On";
/// Label shown after pausing.
pub const LABEL_OFF: &str = "🔇 Music Off";
/// Label shown when no music URL is configured.
pub const LABEL_NO_URL: &str = "No music URL";
/// Label shown when playback could not start.
pub const LABEL_RETRY: &str = "Click again";
/// Initial control caption before any interaction.
pub const LABEL_IDLE: &str = "🎵 Play Music";

/// Starts and stops playback of a single audio URL.
pub trait AudioSink {
    /// Begin playback. Fails when the environment blocks it.
    fn start(&mut self, url: &str) -> Result<()>;

    /// Stop playback. Always succeeds, synchronously.
    fn stop(&mut self);
}

/// Playback state of the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// The music toggle control.
///
/// Owns its two-state playback machine and the control's current label.
/// State only ever changes on [`toggle`](MusicToggle::toggle) calls from
/// the single event-handling task.
pub struct MusicToggle {
    music_url: String,
    state: PlaybackState,
    label: String,
    sink: Box<dyn AudioSink>,
}

impl MusicToggle {
    /// Create a toggle for the config's music URL (possibly empty).
    pub fn new(music_url: String, sink: Box<dyn AudioSink>) -> Self {
        Self {
            music_url,
            state: PlaybackState::Stopped,
            label: LABEL_IDLE.to_string(),
            sink,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Handle a click on the control.
    ///
    /// With no URL configured this never touches playback and only points
    /// out the missing URL. Otherwise Stopped moves to Playing when the
    /// sink starts successfully, stays Stopped with a retry prompt when it
    /// does not, and Playing always moves back to Stopped.
    pub fn toggle(&mut self) -> &str {
        if self.music_url.is_empty() {
            self.label = LABEL_NO_URL.to_string();
            return &self.label;
        }

        match self.state {
            PlaybackState::Playing => {
                self.sink.stop();
                self.state = PlaybackState::Stopped;
                self.label = LABEL_OFF.to_string();
            }
            PlaybackState::Stopped => match self.sink.start(&self.music_url) {
                Ok(()) => {
                    self.state = PlaybackState::Playing;
                    self.label = LABEL_ON.to_string();
                }
                Err(e) => {
                    debug!("playback did not start: {}", e);
                    self.label = LABEL_RETRY.to_string();
                }
            },
        }

        &self.label
    }
}

/// Sink that plays a URL by spawning an external player process.
pub struct ProcessPlayer {
    command: String,
    child: Option<Child>,
}

impl ProcessPlayer {
    /// Default player command used by the interactive session.
    pub const DEFAULT_COMMAND: &'static str = "mpv";

    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            child: None,
        }
    }
}

impl Default for ProcessPlayer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COMMAND)
    }
}

impl AudioSink for ProcessPlayer {
    fn start(&mut self, url: &str) -> Result<()> {
        let child = Command::new(&self.command)
            .arg("--no-video")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(FolioError::Io)?;
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for ProcessPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
