//! A three-round party word-guessing game engine with optional `no_std`
//! support.
//!
//! Two teams share one device and play the same word selection through three
//! rounds: Describe, Word and Mime. The crate provides a [`GameSession`] type
//! that owns the word pool, the round queue, the current turn and the scores.
//! Rendering, timers and storage stay with the caller.
//!
//! # Example
//!
//! ```
//! use charades::{GameOptions, GameSession, MemoryCatalog, Team};
//!
//! let catalog = MemoryCatalog::parse("en|Animals|Giraffe\nen|Animals|Penguin").unwrap();
//! let mut session = GameSession::new(catalog, 42);
//! session.init_game(GameOptions::default());
//!
//! session.init_turn().unwrap();
//! session.play_word(true, false).unwrap();
//! session.play_word(false, false).unwrap();
//! session.finish_turn().unwrap();
//!
//! assert_eq!(session.team_total_score(Team::First), 1);
//! assert_eq!(session.current_team(), Team::Second);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod catalog;
pub mod error;
pub mod game;
pub mod options;
pub mod timer;
pub mod view;
pub mod word;

// Re-export main types
pub use catalog::{MemoryCatalog, WordCatalog, select_words};
pub use error::{CatalogError, ParseCategoryError, RoundError, TurnError};
pub use game::{GameSession, GameState, Round, Team};
pub use options::GameOptions;
pub use timer::{TimerEvent, TurnTimer};
pub use view::{
    PlayView, PlayedWord, ScoreRow, Scoreboard, TurnEndView, TurnStartView, TurnSummary,
};
pub use word::{Category, Word};
