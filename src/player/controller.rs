use crate::library::{Playlist, Track, format_time};

use super::error::PlayerError;
use super::events::{PlaybackState, PlayerEvent};

/// Owns the playlist and the simulated playback position.
///
/// Every observable change is recorded as a `PlayerEvent`; callers drain them
/// with [`PlaybackController::take_events`].
pub struct PlaybackController {
    playlist: Playlist,
    current: usize,
    playback: PlaybackState,
    elapsed: f64,
    autoplay: bool,
    volume: u8,
    events: Vec<PlayerEvent>,
}

impl PlaybackController {
    /// Create a paused controller positioned at the start of the first track.
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            current: 0,
            playback: PlaybackState::Paused,
            elapsed: 0.0,
            autoplay: true,
            volume: 100,
            events: Vec::new(),
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> &Track {
        // `current` is only ever set to a validated index of a non-empty playlist.
        &self.playlist.tracks()[self.current]
    }

    pub fn state(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Elapsed time as a percentage of the current track. Zero-length tracks
    /// report 0.
    pub fn progress_percent(&self) -> f64 {
        let duration = f64::from(self.current_track().duration_secs);
        if duration <= 0.0 {
            return 0.0;
        }
        self.elapsed / duration * 100.0
    }

    /// Drain the notifications recorded since the last call.
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Make `index` the current track and rewind it. Play state is unchanged.
    pub fn load_track(&mut self, index: usize) -> Result<(), PlayerError> {
        let len = self.playlist.len();
        if index >= len {
            return Err(PlayerError::TrackOutOfRange { index, len });
        }

        self.current = index;
        self.elapsed = 0.0;

        let track = self.current_track().clone();
        log::debug!("encore: loaded track {}: {}", index, track.title);
        self.events.push(PlayerEvent::TrackChanged { index, track });
        self.events.push(PlayerEvent::ProgressReset);
        Ok(())
    }

    pub fn play(&mut self) {
        self.playback = PlaybackState::Playing;
        log::info!("encore: playing: {}", self.current_track().title);
        self.events.push(PlayerEvent::PlaybackStarted {
            index: self.current,
        });
    }

    pub fn pause(&mut self) {
        self.playback = PlaybackState::Paused;
        log::info!("encore: paused");
        self.events.push(PlayerEvent::PlaybackPaused);
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Step back one track, wrapping to the last one.
    pub fn previous(&mut self) {
        let len = self.playlist.len();
        self.step_to((self.current + len - 1) % len);
    }

    /// Step forward one track, wrapping to the first one.
    pub fn next(&mut self) {
        let len = self.playlist.len();
        self.step_to((self.current + 1) % len);
    }

    fn step_to(&mut self, index: usize) {
        let was_playing = self.is_playing();
        // Both callers compute `index` modulo the playlist length.
        if self.load_track(index).is_ok() && was_playing {
            self.play();
        }
    }

    /// Jump to `fraction` of the current track. The fraction is clamped to
    /// `[0, 1]`; NaN seeks to the start.
    pub fn seek(&mut self, fraction: f64) {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.elapsed = fraction * f64::from(self.current_track().duration_secs);
        log::info!("encore: seeking to: {}", format_time(self.elapsed));
        self.push_progress();
    }

    /// Store the cosmetic volume, clamped to 100.
    pub fn set_volume(&mut self, percent: u8) {
        self.volume = percent.min(100);
        log::info!("encore: volume changed to: {}%", self.volume);
        self.events.push(PlayerEvent::VolumeChanged(self.volume));
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
        self.events.push(PlayerEvent::AutoplayChanged(enabled));
    }

    /// Advance the simulated clock by one second while playing.
    ///
    /// Reaching the end of the track either rolls over to the next track
    /// (autoplay) or pauses and rewinds.
    pub fn tick(&mut self) {
        if !self.is_playing() {
            return;
        }

        self.elapsed += 1.0;
        if self.elapsed >= f64::from(self.current_track().duration_secs) {
            if self.autoplay {
                self.next();
            } else {
                self.pause();
                self.elapsed = 0.0;
            }
        }

        self.push_progress();
    }

    fn push_progress(&mut self) {
        let percent = self.progress_percent();
        self.events.push(PlayerEvent::ProgressUpdated {
            elapsed: self.elapsed,
            percent,
        });
    }
}
