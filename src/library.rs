//! Playlist data: tracks, the non-empty `Playlist` and helpers to load one
//! from a TOML file or fall back to the built-in sample list.

mod display;
mod error;
mod load;
mod model;

pub use display::*;
pub use error::LibraryError;
pub use load::load_playlist;
pub use model::*;
