//! CLI charades example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use charades::{
    GameOptions, GameSession, MemoryCatalog, Scoreboard, TimerEvent, TurnEndView, TurnTimer,
};

const DEMO_CATALOG: &str = "\
# language|Category|text
en|Animals|Giraffe
en|Animals|Penguin
en|Animals|Octopus
en|Food|Pancake
en|Food|Sushi
en|Jobs|Firefighter
en|Jobs|Astronaut
en|Objects|Umbrella
en|Objects|Toothbrush
en|Vehicles|Submarine
en|Activities|Skydiving
en|Nature|Volcano
";

fn main() {
    env_logger::init();

    println!("Charades CLI example (type 'q' to quit)");

    let catalog = match MemoryCatalog::parse(DEMO_CATALOG) {
        Ok(catalog) => catalog,
        Err(err) => {
            println!("Catalog error: {err}");
            return;
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = GameSession::new(catalog, seed);

    let Some(count) = prompt_usize("How many words? ") else {
        return;
    };
    let Some(seconds) = prompt_usize("Seconds per turn? ") else {
        return;
    };

    let options = GameOptions::default()
        .with_words_count(count)
        .with_turn_duration(Duration::from_secs(seconds as u64));
    session.init_game(options);
    println!("{} words drawn.", session.words().len());

    loop {
        while session.has_more_words() {
            let start = session.turn_start_view();
            println!(
                "\nRound {} | {} to play | {} words left",
                start.round, start.team, start.words_remaining
            );
            if prompt_line("Press enter to start the turn: ") == "q" {
                return;
            }

            if let Err(err) = session.init_turn() {
                println!("Turn error: {err}");
                return;
            }
            if play_turn(&mut session) {
                return;
            }

            review_turn(&mut session);
            match session.finish_turn() {
                Ok(summary) => println!(
                    "{} found {} and missed {}.",
                    summary.team, summary.found, summary.missed
                ),
                Err(err) => println!("Turn error: {err}"),
            }
        }

        if let Err(err) = session.finish_round() {
            println!("Round error: {err}");
            return;
        }
        print_scoreboard(&session.scoreboard());

        if !session.has_more_rounds() {
            println!("Game over.");
            break;
        }
        if let Err(err) = session.start_next_round() {
            println!("Round error: {err}");
            return;
        }
    }
}

/// Plays words until time runs out or the round is empty. Returns `true` if
/// the player quit.
fn play_turn(session: &mut GameSession<MemoryCatalog>) -> bool {
    let mut timer = TurnTimer::new(session.options().turn_duration);
    let mut last = Instant::now();

    while let Some(word) = session.play_view().current_word {
        let input = prompt_line(&format!(
            "Word: {} | [f]ound [m]issed: ",
            colorize(&word.text, "33")
        ));
        if input == "q" {
            return true;
        }
        let found = input == "f";

        let now = Instant::now();
        let event = timer.advance(now - last);
        last = now;

        match event {
            TimerEvent::Running { remaining } => {
                if let Err(err) = session.play_word(found, false) {
                    println!("Play error: {err:?}");
                }
                println!("{}s left", remaining.as_secs());
            }
            TimerEvent::Expired | TimerEvent::Stopped => {
                println!("{}", colorize("Time's up!", "31"));
                if let Err(err) = session.play_word(found, true) {
                    println!("Play error: {err:?}");
                }
                break;
            }
        }
    }

    timer.stop();
    false
}

fn review_turn(session: &mut GameSession<MemoryCatalog>) {
    loop {
        let view = session.turn_end_view();
        print_review(&view);

        let input = prompt_line("Number to toggle, enter to continue: ");
        let Ok(index) = input.parse::<usize>() else {
            return;
        };
        let Some(played) = view.played.get(index) else {
            println!("No such word.");
            continue;
        };
        if let Err(err) = session.change_value_in_played_words(&played.word, played.found) {
            println!("Review error: {err}");
        }
    }
}

fn print_review(view: &TurnEndView) {
    println!("\n{} found {} of {}:", view.team, view.found, view.played.len());
    for (index, played) in view.played.iter().enumerate() {
        let mark = if played.found {
            colorize("found", "32")
        } else {
            colorize("missed", "90")
        };
        println!("  {index}: {} ({mark})", played.word);
    }
}

fn print_scoreboard(board: &Scoreboard) {
    println!("\nScores:");
    for row in &board.rows {
        let rounds = row
            .rounds
            .iter()
            .map(|score| score.map_or_else(|| "-".to_string(), |n| n.to_string()))
            .collect::<Vec<_>>()
            .join(" / ");
        println!("  {}: {rounds} | total {}", row.team, row.total);
    }
    if let Some(team) = board.leader() {
        println!("{team} leads.");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
