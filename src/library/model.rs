use serde::Deserialize;

use super::error::LibraryError;

fn default_art() -> String {
    "🎵".to_string()
}

/// A single playable item. Durations are whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    #[serde(rename = "duration")]
    pub duration_secs: u32,
    #[serde(default = "default_art")]
    pub art: String,
}

impl Track {
    pub fn new(title: &str, artist: &str, duration_secs: u32, art: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            duration_secs,
            art: art.to_string(),
        }
    }
}

/// An ordered list of tracks that always holds at least one entry.
#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist, rejecting an empty track list.
    pub fn new(tracks: Vec<Track>) -> Result<Self, LibraryError> {
        if tracks.is_empty() {
            return Err(LibraryError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    /// The three demo tracks shipped with the player.
    pub fn sample() -> Self {
        Self {
            tracks: vec![
                Track::new("Demo Song", "Demo Artist", 225, "🎵"),
                Track::new("Another Track", "Another Artist", 198, "🎶"),
                Track::new("Third Song", "Third Artist", 267, "🎤"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
