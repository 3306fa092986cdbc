//! Playback state and the notifications emitted by the controller.

use crate::library::Track;

/// Whether the simulated playback clock is running.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// A change the presentation layer may want to reflect.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// A new track became current.
    TrackChanged { index: usize, track: Track },
    /// Elapsed time went back to zero because a track was loaded.
    ProgressReset,
    /// Elapsed time moved (seek or tick).
    ProgressUpdated { elapsed: f64, percent: f64 },
    /// Playback started or continued on the current track.
    PlaybackStarted { index: usize },
    PlaybackPaused,
    /// Volume changed; cosmetic only, there is no audio signal.
    VolumeChanged(u8),
    AutoplayChanged(bool),
}
