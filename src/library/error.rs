use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a playlist.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read playlist {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse playlist {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("playlist must contain at least one track")]
    EmptyPlaylist,
}
