use thiserror::Error;

/// Raised while building a [`Timeline`](crate::Timeline). Every variant is a
/// configuration mistake, so construction fails instead of degrading at
/// runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("timeline has no segments")]
    Empty,
    #[error("segment id `{0}` is used more than once")]
    DuplicateId(String),
    #[error("segment `{id}` has an invalid range [{start}, {end})")]
    InvalidRange { id: String, start: f32, end: f32 },
    #[error("first segment `{id}` starts at {start}, expected 0")]
    StartNotZero { id: String, start: f32 },
    #[error("last segment `{id}` ends at {end}, expected 1")]
    EndNotOne { id: String, end: f32 },
    #[error("segment `{next}` starts at {start} but `{prev}` ends at {end}")]
    Gap {
        prev: String,
        next: String,
        end: f32,
        start: f32,
    },
    #[error("segment `{0}` has a non-finite keyframe channel")]
    NonFinite(String),
    #[error("segment `{id}` has an invalid field of view {fov}")]
    InvalidFov { id: String, fov: f32 },
    #[error("unknown easing `{0}`")]
    UnknownEasing(String),
    #[error("timeline config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for TimelineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
