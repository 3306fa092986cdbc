//! Application model: `App`.
//!
//! `App` owns the `PlaybackController` and the bits of state only the UI
//! cares about. Input handlers call into it; the event loop calls
//! [`App::apply_events`] once per iteration to fold controller
//! notifications into the status line and cursor.

use crate::player::{PlaybackController, PlayerError, PlayerEvent};

/// The main application model.
pub struct App {
    pub player: PlaybackController,

    /// Highlighted row in the playlist.
    pub cursor: usize,
    /// When set, the cursor jumps to every newly loaded track.
    pub follow_playback: bool,

    /// Last user-facing notification.
    pub status: String,
    /// Where the playlist came from, shown in the status box.
    pub playlist_source: Option<String>,
}

impl App {
    /// Create a new `App` driving `player`.
    pub fn new(player: PlaybackController) -> Self {
        Self {
            cursor: player.current_index(),
            player,
            follow_playback: true,
            status: String::new(),
            playlist_source: None,
        }
    }

    /// Record where the playlist was loaded from.
    pub fn set_playlist_source(&mut self, source: String) {
        self.playlist_source = Some(source);
    }

    /// Drain controller notifications into presentation state.
    ///
    /// Returns the drained events so callers can react further.
    pub fn apply_events(&mut self) -> Vec<PlayerEvent> {
        let events = self.player.take_events();
        for event in &events {
            match event {
                PlayerEvent::TrackChanged { index, track } => {
                    if self.follow_playback {
                        self.cursor = *index;
                    }
                    self.status = format!("Loaded: {}", track.title);
                }
                PlayerEvent::PlaybackStarted { .. } => {
                    self.status = format!("Playing: {}", self.player.current_track().title);
                }
                PlayerEvent::PlaybackPaused => {
                    self.status = "Paused".to_string();
                }
                PlayerEvent::VolumeChanged(v) => {
                    self.status = format!("Volume: {}%", v);
                }
                PlayerEvent::AutoplayChanged(on) => {
                    self.status = format!("Autoplay: {}", if *on { "on" } else { "off" });
                }
                PlayerEvent::ProgressReset | PlayerEvent::ProgressUpdated { .. } => {}
            }
        }
        events
    }

    pub fn track_count(&self) -> usize {
        self.player.playlist().len()
    }

    /// Move the cursor down, wrapping to the top.
    pub fn cursor_down(&mut self) {
        self.follow_playback = false;
        self.cursor = (self.cursor + 1) % self.track_count();
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn cursor_up(&mut self) {
        self.follow_playback = false;
        let len = self.track_count();
        self.cursor = (self.cursor + len - 1) % len;
    }

    /// Load the track under the cursor and resume following playback.
    pub fn load_cursor_track(&mut self) -> Result<(), PlayerError> {
        self.follow_playback = true;
        self.player.load_track(self.cursor)
    }

    /// Load track `number`, counted from 1 as shown in the playlist.
    pub fn load_track_number(&mut self, number: usize) -> Result<(), PlayerError> {
        let index = number.checked_sub(1).ok_or(PlayerError::TrackOutOfRange {
            index: 0,
            len: self.track_count(),
        })?;
        self.follow_playback = true;
        self.player.load_track(index)
    }

    /// Seek relative to the current position by `delta_secs`.
    pub fn scrub(&mut self, delta_secs: i64) {
        let duration = f64::from(self.player.current_track().duration_secs);
        if duration <= 0.0 {
            return;
        }
        let target = self.player.elapsed() + delta_secs as f64;
        self.player.seek(target / duration);
    }

    pub fn volume_up(&mut self, step: u8) {
        let v = self.player.volume().saturating_add(step);
        self.player.set_volume(v);
    }

    pub fn volume_down(&mut self, step: u8) {
        let v = self.player.volume().saturating_sub(step);
        self.player.set_volume(v);
    }

    pub fn toggle_autoplay(&mut self) {
        let on = !self.player.autoplay();
        self.player.set_autoplay(on);
    }
}
