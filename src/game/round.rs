use log::info;

use crate::error::RoundError;

use super::GameSession;

impl<C> GameSession<C> {
    /// Marks the current round finished so the scoreboard can be shown.
    ///
    /// # Errors
    ///
    /// Returns an error if no game was started or a turn is still open.
    pub fn finish_round(&mut self) -> Result<(), RoundError> {
        if !self.started {
            return Err(RoundError::NotStarted);
        }
        if self.turn_in_progress {
            return Err(RoundError::TurnInProgress);
        }

        if !self.current_round_finished {
            info!(
                "round {} finished with {} words left",
                self.current_round,
                self.words_to_play.len()
            );
        }
        self.current_round_finished = true;

        Ok(())
    }

    /// Advances to the next round and reshuffles the whole selection into the
    /// round queue.
    ///
    /// The team that would have played next keeps the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no game was started, the last round is being
    /// played, or the current round was not finished.
    pub fn start_next_round(&mut self) -> Result<(), RoundError> {
        if !self.started {
            return Err(RoundError::NotStarted);
        }
        let Some(next) = self.current_round.next() else {
            return Err(RoundError::NoMoreRounds);
        };
        if !self.current_round_finished {
            return Err(RoundError::RoundNotFinished);
        }

        self.current_round = next;
        self.init_round();

        Ok(())
    }
}
