use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("track index {index} is out of range for a playlist of {len} tracks")]
    TrackOutOfRange { index: usize, len: usize },
}
