//! Game engine and state management.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::info;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::catalog::WordCatalog;
use crate::options::GameOptions;
use crate::view::PlayedWord;
use crate::word::Word;

mod round;
mod snapshot;
pub mod state;
mod turn;

pub use state::{GameState, Round, Team};

/// A game of three rounds played by two teams on one device.
///
/// The session owns the word selection, the per-round queue, the words played
/// in the current turn and every team's found words. The presentation layer
/// drives it through [`init_turn`](Self::init_turn),
/// [`play_word`](Self::play_word), [`finish_turn`](Self::finish_turn),
/// [`finish_round`](Self::finish_round) and
/// [`start_next_round`](Self::start_next_round), and re-renders from the
/// snapshot methods after each call.
#[derive(Debug, Clone)]
pub struct GameSession<C> {
    /// Where words are drawn from.
    catalog: C,
    /// Random number generator for selection and reshuffles.
    rng: ChaCha8Rng,
    /// Configuration snapshot taken at game start.
    options: GameOptions,
    /// Whether a game has been started.
    started: bool,
    current_round: Round,
    current_team: Team,
    current_round_finished: bool,
    /// The selection for the whole game, reused every round.
    words: Vec<Word>,
    /// Found words (`team` -> `round` -> words).
    team_words: [[Vec<Word>; 3]; 2],
    /// Words left to attempt in the current round.
    words_to_play: VecDeque<Word>,
    /// Distinct words missed at least once in the current round.
    missed_in_round: Vec<Word>,
    /// Words attempted during the current turn.
    played_in_turn: Vec<PlayedWord>,
    current_word: Option<Word>,
    /// Whether played words are waiting to be committed by `finish_turn`.
    turn_in_progress: bool,
    /// Whether the word played when the timer ran out was recorded.
    timer_ended: bool,
}

impl<C: WordCatalog> GameSession<C> {
    /// Creates a session drawing from `catalog`, seeded for reproducible
    /// selections and shuffles.
    ///
    /// # Example
    ///
    /// ```
    /// use charades::{GameSession, GameState, MemoryCatalog};
    ///
    /// let session = GameSession::new(MemoryCatalog::default(), 42);
    /// assert_eq!(session.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(catalog: C, seed: u64) -> Self {
        Self {
            catalog,
            rng: ChaCha8Rng::seed_from_u64(seed),
            options: GameOptions::default(),
            started: false,
            current_round: Round::Describe,
            current_team: Team::First,
            current_round_finished: false,
            words: Vec::new(),
            team_words: Default::default(),
            words_to_play: VecDeque::new(),
            missed_in_round: Vec::new(),
            played_in_turn: Vec::new(),
            current_word: None,
            turn_in_progress: false,
            timer_ended: false,
        }
    }

    /// Starts a new game, drawing `options.words_count` words from the catalog.
    ///
    /// Any previous game is discarded. If the catalog holds fewer matching
    /// words than requested, the game is played with the smaller selection.
    ///
    /// # Example
    ///
    /// ```
    /// use charades::{GameOptions, GameSession, GameState, MemoryCatalog, Round};
    ///
    /// let catalog = MemoryCatalog::parse("en|Animals|Cat\nen|Animals|Dog").unwrap();
    /// let mut session = GameSession::new(catalog, 7);
    /// session.init_game(GameOptions::default().with_words_count(10));
    ///
    /// assert_eq!(session.state(), GameState::RoundInProgress);
    /// assert_eq!(session.current_round(), Round::Describe);
    /// assert_eq!(session.words().len(), 2);
    /// ```
    pub fn init_game(&mut self, options: GameOptions) {
        let categories = options.enabled_categories();
        let words = self.catalog.random_words(
            &categories,
            &options.language,
            options.words_count,
            &mut self.rng,
        );
        self.init_game_with_words(words, options);
    }
}

impl<C> GameSession<C> {
    /// Starts a new game with an already selected word list.
    ///
    /// `options.words_count` and the category selection are kept for display
    /// only; `words` is used as given.
    pub fn init_game_with_words(&mut self, words: Vec<Word>, options: GameOptions) {
        info!(
            "starting game with {} words (language {:?}, {} requested)",
            words.len(),
            options.language,
            options.words_count
        );

        self.options = options;
        self.words = words;
        self.started = true;
        self.current_round = Round::Describe;
        self.current_team = Team::First;
        self.team_words = Default::default();
        self.played_in_turn.clear();
        self.current_word = None;
        self.turn_in_progress = false;
        self.timer_ended = false;
        self.init_round();
    }

    /// Discards the current game and returns to [`GameState::NotStarted`].
    pub fn reset(&mut self) {
        self.started = false;
        self.current_round = Round::Describe;
        self.current_team = Team::First;
        self.current_round_finished = false;
        self.words.clear();
        self.team_words = Default::default();
        self.words_to_play.clear();
        self.missed_in_round.clear();
        self.played_in_turn.clear();
        self.current_word = None;
        self.turn_in_progress = false;
        self.timer_ended = false;
    }

    /// Refills the round queue with a fresh shuffle of the whole selection.
    fn init_round(&mut self) {
        info!("starting round {}", self.current_round);

        self.current_round_finished = false;
        let mut queue = self.words.clone();
        queue.shuffle(&mut self.rng);
        self.words_to_play = queue.into();
        self.missed_in_round.clear();
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        if !self.started {
            GameState::NotStarted
        } else if !self.current_round_finished {
            GameState::RoundInProgress
        } else if self.has_more_rounds() {
            GameState::RoundFinished
        } else {
            GameState::GameComplete
        }
    }

    /// Returns the round being played.
    pub const fn current_round(&self) -> Round {
        self.current_round
    }

    /// Returns the team whose turn it is.
    pub const fn current_team(&self) -> Team {
        self.current_team
    }

    /// Returns whether the current round was marked finished.
    pub const fn is_round_finished(&self) -> bool {
        self.current_round_finished
    }

    /// Returns whether a turn is open.
    pub const fn is_turn_in_progress(&self) -> bool {
        self.turn_in_progress
    }

    /// Returns the options the game was started with.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the word selection for the whole game.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the words left in the current round, front first.
    pub fn words_to_play(&self) -> impl ExactSizeIterator<Item = &Word> {
        self.words_to_play.iter()
    }

    /// Returns the words missed at least once in the current round.
    pub fn missed_in_round(&self) -> &[Word] {
        &self.missed_in_round
    }

    /// Returns the words attempted during the current turn.
    ///
    /// The list stays readable after [`finish_turn`](Self::finish_turn) until
    /// the next [`init_turn`](Self::init_turn).
    pub fn played_in_turn(&self) -> &[PlayedWord] {
        &self.played_in_turn
    }

    /// Returns the word currently shown to the team.
    pub const fn current_word(&self) -> Option<&Word> {
        self.current_word.as_ref()
    }

    /// Returns the words a team found during a round.
    pub fn team_words(&self, team: Team, round: Round) -> &[Word] {
        &self.team_words[team.index()][round.index()]
    }

    /// Returns whether words are left in the current round.
    pub fn has_more_words(&self) -> bool {
        !self.words_to_play.is_empty()
    }

    /// Returns the number of words left in the current round.
    pub fn words_remaining(&self) -> usize {
        self.words_to_play.len()
    }

    /// Returns whether a round follows the current one.
    pub const fn has_more_rounds(&self) -> bool {
        self.current_round.next().is_some()
    }

    /// Returns a team's score for a round.
    ///
    /// Returns `None` for rounds after the current one.
    pub fn team_round_score(&self, team: Team, round: Round) -> Option<usize> {
        (round <= self.current_round).then(|| self.team_words(team, round).len())
    }

    /// Returns a team's score summed over every round.
    pub fn team_total_score(&self, team: Team) -> usize {
        self.team_words[team.index()].iter().map(Vec::len).sum()
    }
}
