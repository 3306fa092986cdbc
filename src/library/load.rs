use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::LibraryError;
use super::model::{Playlist, Track};

/// On-disk layout: a list of `[[tracks]]` tables.
#[derive(Debug, Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

/// Parse playlist TOML text. `path` is only used for error reporting.
pub(super) fn parse_playlist(text: &str, path: &Path) -> Result<Playlist, LibraryError> {
    let file: PlaylistFile = toml::from_str(text).map_err(|source| LibraryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Playlist::new(file.tracks)
}

/// Load a playlist from a TOML file.
pub fn load_playlist(path: &Path) -> Result<Playlist, LibraryError> {
    let text = fs::read_to_string(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let playlist = parse_playlist(&text, path)?;
    log::info!(
        "encore: loaded {} tracks from {}",
        playlist.len(),
        path.display()
    );
    Ok(playlist)
}
