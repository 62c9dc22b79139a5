//! Game state types.

use core::fmt;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game has been started.
    NotStarted,
    /// Teams are taking turns in the current round.
    RoundInProgress,
    /// The current round is over and a later round remains.
    RoundFinished,
    /// The last round is over.
    GameComplete,
}

/// One of the three rounds of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Round {
    /// Describe the word freely without saying it.
    Describe,
    /// Give a single word as a hint.
    Word,
    /// Mime the word without speaking.
    Mime,
}

impl Round {
    /// Every round, in play order.
    pub const ALL: [Self; 3] = [Self::Describe, Self::Word, Self::Mime];

    /// Returns the zero-based position of the round.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the round at a zero-based position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Describe),
            1 => Some(Self::Word),
            2 => Some(Self::Mime),
            _ => None,
        }
    }

    /// Returns the round played after this one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the display name of the round.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Describe => "Describe",
            Self::Word => "Word",
            Self::Mime => "Mime",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Team {
    /// The team that plays first.
    First,
    /// The other team.
    Second,
}

impl Team {
    /// Both teams, in play order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Returns the zero-based index of the team.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("Team 1"),
            Self::Second => f.write_str("Team 2"),
        }
    }
}
