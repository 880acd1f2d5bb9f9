use thiserror::Error;

/// Everything that can go wrong between range text and a running track.
/// All variants are raised synchronously, before any track state mutates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    #[error("malformed range \"{0}\", expected <int>-<int>")]
    MalformedRange(String),

    #[error("no ranges given, nothing to schedule")]
    EmptyRanges,

    #[error("scroll speed must be positive, got {0}")]
    InvalidSpeed(f32),

    #[error("refusing to advance by dt = {0}")]
    InvalidTick(f32),
}
