//! Simulated playback: the controller state machine, the notifications it
//! emits and the periodic ticker that drives elapsed time.
//!
//! Nothing here touches the terminal. The runtime owns one
//! `PlaybackController`, feeds it user input and ticks, and drains its
//! `PlayerEvent`s to refresh the UI.

mod controller;
mod error;
mod events;
mod ticker;

pub use controller::PlaybackController;
pub use error::PlayerError;
pub use events::{PlaybackState, PlayerEvent};
pub use ticker::Ticker;

#[cfg(test)]
mod tests;
