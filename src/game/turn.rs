use log::debug;

use crate::error::TurnError;
use crate::view::{PlayedWord, TurnSummary};
use crate::word::Word;

use super::{GameSession, GameState};

impl<C> GameSession<C> {
    /// Starts a turn for the current team.
    ///
    /// Clears the words played in the previous turn and shows the word at the
    /// front of the round queue. The shown word is `None` when the queue is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the previous turn was
    /// not finished.
    pub fn init_turn(&mut self) -> Result<(), TurnError> {
        if self.state() != GameState::RoundInProgress {
            return Err(TurnError::InvalidState);
        }
        if self.turn_in_progress {
            return Err(TurnError::TurnInProgress);
        }

        self.played_in_turn.clear();
        self.current_word = self.words_to_play.front().cloned();
        self.turn_in_progress = true;
        self.timer_ended = false;

        debug!(
            "{} starts a turn in round {} with {} words left",
            self.current_team,
            self.current_round,
            self.words_to_play.len()
        );

        Ok(())
    }

    /// Records the outcome of the word at the front of the round queue.
    ///
    /// The word leaves the queue and is appended to the turn's played words.
    /// Unless `timer_ended` is set, the next word in the queue is shown; when
    /// it is set, the expired word stays on screen and the turn accepts no
    /// further words.
    ///
    /// Returns `Ok(None)` without touching any state when the queue is empty,
    /// even if the turn was already committed.
    ///
    /// # Errors
    ///
    /// Returns an error if words remain and no turn is in progress, or if the
    /// word played when the timer ran out was already recorded.
    pub fn play_word(
        &mut self,
        found: bool,
        timer_ended: bool,
    ) -> Result<Option<PlayedWord>, TurnError> {
        if self.words_to_play.is_empty() {
            debug!("no words left to play, ignoring");
            return Ok(None);
        }
        if !self.turn_in_progress {
            return Err(TurnError::NoTurnInProgress);
        }
        if self.timer_ended {
            return Err(TurnError::TimerExpired);
        }

        let Some(word) = self.words_to_play.pop_front() else {
            return Ok(None);
        };
        debug!("{word} played, found: {found}, timer ended: {timer_ended}");

        let played = PlayedWord { word, found };
        self.played_in_turn.push(played.clone());

        if timer_ended {
            self.timer_ended = true;
        } else {
            self.current_word = self.words_to_play.front().cloned();
        }

        Ok(Some(played))
    }

    /// Flips the outcome of a word played during the current turn.
    ///
    /// The first played entry equal to `(word, outcome)` is flipped. Returns
    /// the new outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn was already committed by
    /// [`finish_turn`](Self::finish_turn), or if no matching entry exists.
    pub fn change_value_in_played_words(
        &mut self,
        word: &Word,
        outcome: bool,
    ) -> Result<bool, TurnError> {
        if !self.turn_in_progress {
            return Err(TurnError::NoTurnInProgress);
        }

        let entry = self
            .played_in_turn
            .iter_mut()
            .find(|played| played.word == *word && played.found == outcome)
            .ok_or(TurnError::WordNotPlayed)?;
        entry.found = !entry.found;

        debug!("{word} corrected, found: {}", entry.found);
        Ok(entry.found)
    }

    /// Commits the current turn and hands play to the other team.
    ///
    /// Found words are credited to the current team for the current round,
    /// once per distinct word.
    /// Missed words go back to the end of the round queue, in play order.
    /// The played words stay readable until the next
    /// [`init_turn`](Self::init_turn).
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is in progress, which includes a second
    /// call for the same turn.
    pub fn finish_turn(&mut self) -> Result<TurnSummary, TurnError> {
        if !self.turn_in_progress {
            return Err(TurnError::NoTurnInProgress);
        }

        let team = self.current_team;
        let round = self.current_round;
        let mut found = 0;
        let mut missed = 0;

        for played in &self.played_in_turn {
            if played.found {
                let cell = &mut self.team_words[team.index()][round.index()];
                if !cell.contains(&played.word) {
                    cell.push(played.word.clone());
                }
                found += 1;
            } else {
                self.words_to_play.push_back(played.word.clone());
                if !self.missed_in_round.contains(&played.word) {
                    self.missed_in_round.push(played.word.clone());
                }
                missed += 1;
            }
        }

        self.current_team = team.other();
        self.turn_in_progress = false;

        debug!("{team} finished a turn in round {round}: {found} found, {missed} missed");

        Ok(TurnSummary {
            team,
            round,
            found,
            missed,
        })
    }

    /// Ends the turn because time ran out.
    ///
    /// Records the shown word as missed, unless the timer-ended word was
    /// already recorded, then commits the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is in progress.
    pub fn expire_turn(&mut self) -> Result<TurnSummary, TurnError> {
        if !self.timer_ended {
            self.play_word(false, true)?;
        }
        self.finish_turn()
    }
}
