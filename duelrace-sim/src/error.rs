use duelrace_core::player::PlayerID;
use thiserror::Error;

// Everything that can stop a race from being set up. Nothing in here can
// happen once a race is underway; bad driving is ignored, not reported.
#[derive(Debug, Error)]
pub enum RaceError {
    #[error("track has no checkpoints")]
    NoCheckpoints,
    #[error("track needs at least one checkpoint before the finish line, found {0} zone(s)")]
    NoIntermediateCheckpoints(usize),
    #[error("checkpoint {id} has a non-positive size ({width} x {height})")]
    DegenerateCheckpoint { id: usize, width: f64, height: f64 },
    #[error("{what} size must be positive, got {width} x {height}")]
    InvalidDimensions {
        what: &'static str,
        width: f64,
        height: f64,
    },
    #[error("no player with id {0}")]
    UnknownPlayer(PlayerID),
    #[error("unknown track '{0}'")]
    UnknownTrack(String),
    #[error("could not read track file {path}: {source}")]
    TrackFile {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse track layout: {0}")]
    Layout(#[from] serde_yaml::Error),
}
