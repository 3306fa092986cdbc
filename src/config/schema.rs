use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Roll over to the next track when one finishes.
    pub autoplay: bool,
    /// Length of one simulated second (milliseconds).
    pub tick_ms: u64,
    /// Start playing the first track right away.
    pub start_playing: bool,
    /// Volume shown at startup, 0-100.
    pub initial_volume: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            tick_ms: 1000,
            start_playing: false,
            initial_volume: 70,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
    /// Volume change per `+` / `-` press.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 10,
            volume_step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Whether the playlist cursor jumps to the track that starts playing.
    pub follow_playback: bool,

    /// Which track fields to show in the "now playing" line, and in what order.
    ///
    /// Example: ["art", "artist", "title"]
    pub now_playing_fields: Vec<TrackDisplayField>,

    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,

    /// Which time fields to show on the progress bar, and in what order.
    ///
    /// Example: ["elapsed", "total", "remaining"]
    pub time_fields: Vec<TimeField>,

    /// Separator used to join `time_fields`.
    pub time_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ encore: a pretend music player ~ ".to_string(),
            follow_playback: true,
            now_playing_fields: vec![TrackDisplayField::Title, TrackDisplayField::Artist],
            now_playing_separator: " - ".to_string(),
            time_fields: vec![TimeField::Elapsed, TimeField::Total],
            time_separator: " / ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeField {
    Elapsed,
    Total,
    Remaining,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    /// The track's display symbol.
    #[serde(alias = "emoji", alias = "symbol")]
    Art,
    Title,
    Artist,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Optional TOML playlist to load instead of the built-in sample.
    /// A path given on the command line wins over this one.
    pub playlist_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `env_logger` filter string, e.g. `info` or `encore=debug`.
    /// `RUST_LOG` overrides it.
    pub level: String,
    /// Append log output to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}
