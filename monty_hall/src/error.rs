// Error taxonomy: bad external input vs. degenerate aggregation requests.
// Both are recoverable by the caller; nothing here should abort a process.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid door {0}: doors are numbered 0, 1 and 2")]
    InvalidDoor(u8),

    #[error("could not read {0:?} as an answer")]
    InvalidReply(String),

    #[error("round is not at the {0} step")]
    OutOfTurn(&'static str),

    // Carries a message instead of the source error so records stay Clone
    #[error("could not reach the contestant: {0}")]
    ContestantUnavailable(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    // A zero-trial batch has no defined frequency; reject it up front
    // instead of dividing by zero later.
    #[error("trial count must be at least 1")]
    DegenerateTrialCount,

    #[error(transparent)]
    Game(#[from] GameError),
}
