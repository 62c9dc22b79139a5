//! Read-only snapshots handed to the presentation layer.

use alloc::vec::Vec;
use core::time::Duration;

use crate::game::{Round, Team};
use crate::word::Word;

/// A word attempted during the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedWord {
    /// The word shown to the team.
    pub word: Word,
    /// Whether the team found it.
    pub found: bool,
}

/// Outcome of a committed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummary {
    /// The team that played the turn.
    pub team: Team,
    /// The round the turn belonged to.
    pub round: Round,
    /// Words credited to the team.
    pub found: usize,
    /// Words sent back to the queue.
    pub missed: usize,
}

/// Scores of a single team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRow {
    /// The team.
    pub team: Team,
    /// Score per round; `None` for rounds not reached yet.
    pub rounds: [Option<usize>; 3],
    /// Sum over every round.
    pub total: usize,
}

impl ScoreRow {
    /// Returns the per-round scores with `-1` for rounds not reached yet.
    #[must_use]
    pub fn sentinel_scores(&self) -> [i64; 3] {
        self.rounds
            .map(|score| score.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX)))
    }
}

/// Per-team, per-round scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    /// One row per team, in [`Team::ALL`] order.
    pub rows: [ScoreRow; 2],
    /// Whether a later round remains.
    pub has_more_rounds: bool,
}

impl Scoreboard {
    /// Returns the row of a team.
    #[must_use]
    pub const fn row(&self, team: Team) -> &ScoreRow {
        &self.rows[team.index()]
    }

    /// Returns the team with the higher total, or `None` on a tie.
    #[must_use]
    pub const fn leader(&self) -> Option<Team> {
        let [first, second] = &self.rows;
        if first.total > second.total {
            Some(first.team)
        } else if second.total > first.total {
            Some(second.team)
        } else {
            None
        }
    }
}

/// Snapshot for the screen shown before a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnStartView {
    /// The round being played.
    pub round: Round,
    /// The team about to play.
    pub team: Team,
    /// Words left in the round queue.
    pub words_remaining: usize,
    /// Scores so far.
    pub scoreboard: Scoreboard,
}

/// Snapshot for the screen shown while a team plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayView {
    /// The word to guess, if any is left.
    pub current_word: Option<Word>,
    /// Words left in the round queue.
    pub words_remaining: usize,
    /// Configured turn length.
    pub turn_duration: Duration,
}

/// Snapshot for the review screen shown after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnEndView {
    /// The team that played.
    pub team: Team,
    /// Every word attempted during the turn, in play order.
    pub played: Vec<PlayedWord>,
    /// Number of words marked found.
    pub found: usize,
}
