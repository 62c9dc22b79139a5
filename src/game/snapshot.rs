use crate::game::{Round, Team};
use crate::view::{PlayView, ScoreRow, Scoreboard, TurnEndView, TurnStartView};

use super::GameSession;

impl<C> GameSession<C> {
    /// Returns the scores of both teams.
    pub fn scoreboard(&self) -> Scoreboard {
        let row = |team: Team| ScoreRow {
            team,
            rounds: Round::ALL.map(|round| self.team_round_score(team, round)),
            total: self.team_total_score(team),
        };

        Scoreboard {
            rows: Team::ALL.map(row),
            has_more_rounds: self.has_more_rounds(),
        }
    }

    /// Returns the snapshot for the screen shown before a turn.
    pub fn turn_start_view(&self) -> TurnStartView {
        TurnStartView {
            round: self.current_round,
            team: self.current_team,
            words_remaining: self.words_to_play.len(),
            scoreboard: self.scoreboard(),
        }
    }

    /// Returns the snapshot for the screen shown while a team plays.
    pub fn play_view(&self) -> PlayView {
        PlayView {
            current_word: self.current_word.clone(),
            words_remaining: self.words_to_play.len(),
            turn_duration: self.options.turn_duration,
        }
    }

    /// Returns the snapshot for the review screen shown after a turn.
    ///
    /// Taken before [`finish_turn`](Self::finish_turn), while outcomes can
    /// still be corrected.
    pub fn turn_end_view(&self) -> TurnEndView {
        TurnEndView {
            team: self.current_team,
            played: self.played_in_turn.clone(),
            found: self.played_in_turn.iter().filter(|p| p.found).count(),
        }
    }
}
