//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// No round is in progress.
    #[error("no round is in progress")]
    InvalidState,
    /// The previous turn has not been finished yet.
    #[error("a turn is already in progress")]
    TurnInProgress,
    /// No turn has been started.
    #[error("no turn is in progress")]
    NoTurnInProgress,
    /// The timer already ended and the last word was recorded.
    #[error("the turn timer has already expired")]
    TimerExpired,
    /// The word was not played during this turn.
    #[error("word was not played during this turn")]
    WordNotPlayed,
}

/// Errors that can occur during round transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The game has not been started.
    #[error("the game has not been started")]
    NotStarted,
    /// A turn must be finished first.
    #[error("a turn is still in progress")]
    TurnInProgress,
    /// The current round has not been finished.
    #[error("the current round is not finished")]
    RoundNotFinished,
    /// The last round was already played.
    #[error("no more rounds to play")]
    NoMoreRounds,
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown word category")]
pub struct ParseCategoryError;

/// Errors that can occur while parsing a plain-text word catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A line does not have the `language|Category|text` shape.
    #[error("line {line}: expected `language|category|text`")]
    MalformedLine {
        /// One-based line number.
        line: usize,
    },
    /// A line names an unknown category.
    #[error("line {line}: unknown category")]
    UnknownCategory {
        /// One-based line number.
        line: usize,
    },
}
