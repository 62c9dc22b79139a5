//! Property tests for the session invariants.

use charades::{Category, GameOptions, GameSession, MemoryCatalog, Round, Team, Word};
use proptest::prelude::*;

fn session(count: usize, seed: u64) -> GameSession<MemoryCatalog> {
    let words = (0..count)
        .map(|i| Word::new(format!("word-{i}"), Category::Objects, "en"))
        .collect();
    let mut session = GameSession::new(MemoryCatalog::default(), seed);
    session.init_game_with_words(words, GameOptions::default());
    session
}

/// Plays turns with the given outcomes until the round runs dry or the
/// outcomes are used up, checking the per-turn invariants along the way.
fn play_round(session: &mut GameSession<MemoryCatalog>, outcomes: &[Vec<bool>]) {
    for turn in outcomes {
        if !session.has_more_words() {
            break;
        }

        session.init_turn().unwrap();
        assert!(session.played_in_turn().is_empty());
        assert_eq!(session.current_word(), session.words_to_play().next());

        for &found in turn {
            session.play_word(found, false).unwrap();
        }

        let team = session.current_team();
        let round = session.current_round();
        let missed: Vec<Word> = session
            .played_in_turn()
            .iter()
            .filter(|p| !p.found)
            .map(|p| p.word.clone())
            .collect();

        session.finish_turn().unwrap();

        let queue: Vec<Word> = session.words_to_play().cloned().collect();
        assert!(queue.ends_with(&missed));
        for word in &missed {
            assert!(!session.team_words(team, round).contains(word));
        }
        assert_eq!(session.current_team(), team.other());
    }
}

proptest! {
    #[test]
    fn first_turn_conserves_words(
        count in 0usize..20,
        seed in any::<u64>(),
        outcomes in prop::collection::vec(any::<bool>(), 0..25),
    ) {
        let mut session = session(count, seed);
        session.init_turn().unwrap();

        for found in outcomes {
            session.play_word(found, false).unwrap();
            prop_assert_eq!(
                session.words_remaining() + session.played_in_turn().len(),
                session.words().len()
            );
        }
    }

    #[test]
    fn total_is_sum_of_rounds(
        count in 1usize..10,
        seed in any::<u64>(),
        turns in prop::collection::vec(prop::collection::vec(any::<bool>(), 0..6), 0..12),
    ) {
        let mut session = session(count, seed);

        for round in Round::ALL {
            play_round(&mut session, &turns);
            for team in Team::ALL {
                let sum: usize = Round::ALL
                    .iter()
                    .filter_map(|&r| session.team_round_score(team, r))
                    .sum();
                prop_assert_eq!(session.team_total_score(team), sum);
            }
            for r in Round::ALL {
                let score = session.team_round_score(Team::First, r);
                prop_assert_eq!(score.is_none(), r > round);
            }

            session.finish_round().unwrap();
            if session.has_more_rounds() {
                session.start_next_round().unwrap();
                prop_assert_eq!(session.words_remaining(), count);
            }
        }
    }

    #[test]
    fn empty_queue_play_changes_nothing(
        count in 0usize..6,
        seed in any::<u64>(),
        found in any::<bool>(),
        timer_ended in any::<bool>(),
    ) {
        let mut session = session(count, seed);
        session.init_turn().unwrap();
        while session.has_more_words() {
            session.play_word(true, false).unwrap();
        }

        let played = session.played_in_turn().to_vec();
        let current = session.current_word().cloned();

        prop_assert_eq!(session.play_word(found, timer_ended), Ok(None));
        prop_assert_eq!(session.played_in_turn(), played.as_slice());
        prop_assert_eq!(session.current_word().cloned(), current);
        prop_assert_eq!(session.words_remaining(), 0);
    }
}
