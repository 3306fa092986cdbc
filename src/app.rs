//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and wraps the playback controller
//! together with the presentation-only state (playlist cursor, status line).

mod model;

pub use model::*;
