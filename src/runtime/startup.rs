use std::path::{Path, PathBuf};

use crate::app::App;
use crate::config;
use crate::library::{Playlist, load_playlist};
use crate::player::PlaybackController;

/// Pick the playlist: CLI path, then `library.playlist_path`, then the
/// built-in sample. Returns the playlist and a label for where it came from.
pub fn resolve_playlist(
    cli_path: Option<PathBuf>,
    settings: &config::Settings,
) -> (Playlist, String) {
    let Some(path) = cli_path.or_else(|| settings.library.playlist_path.clone()) else {
        return (Playlist::sample(), "sample".to_string());
    };

    match load_playlist(&path) {
        Ok(playlist) => (playlist, display_name(&path)),
        Err(e) => {
            log::warn!("encore: {e}; falling back to the sample playlist");
            (Playlist::sample(), "sample".to_string())
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Build the app model and apply playback defaults from `settings`.
pub fn build_app(playlist: Playlist, source: String, settings: &config::Settings) -> App {
    let mut player = PlaybackController::new(playlist);
    player.set_autoplay(settings.playback.autoplay);
    player.set_volume(settings.playback.initial_volume);
    // Announce the first track so the UI starts with its metadata.
    if let Err(e) = player.load_track(0) {
        log::error!("encore: {e}");
    }
    if settings.playback.start_playing {
        player.play();
    }

    let mut app = App::new(player);
    app.follow_playback = settings.ui.follow_playback;
    app.set_playlist_source(source);
    app.apply_events();
    app
}
