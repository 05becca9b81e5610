//! Interactive game mode
//!
//! Menu-driven play over standard input/output.

use crate::core::BoardSize;
use crate::game::{GuessRejection, RoundOutcome, RoundSession, StatsTracker, Submission};
use crate::output::display;
use crate::wordlists::WordCatalog;
use rand::Rng;
use std::io::{self, Write};
use std::time::Instant;

/// Run the interactive game
///
/// Presents the menu until the player exits. Selecting `3` prints the stats
/// summary, resets the stats, and returns; any selection other than `1`, `2`,
/// or `3` prints an error message and also ends the program.
///
/// # Errors
///
/// Returns an error if standard input closes or an I/O error occurs while
/// prompting, or if the word list has no words for a selected board.
pub fn run_play(catalog: &WordCatalog) -> Result<(), String> {
    display::print_instructions();

    let mut stats = StatsTracker::new();
    let mut rng = rand::rng();

    loop {
        display::print_menu();
        let choice = get_user_input("Your choice -->")?;

        match choice.as_str() {
            "1" => play_round(BoardSize::Three, catalog, &mut stats, &mut rng)?,
            "2" => play_round(BoardSize::Five, catalog, &mut stats, &mut rng)?,
            "3" => {
                display::print_stats_summary(&stats.summary());
                stats.reset();
                return Ok(());
            }
            _ => {
                // Any other selection ends the program after the message
                display::print_invalid_menu_choice();
                return Ok(());
            }
        }
    }
}

/// Play one round on the given board
fn play_round<R: Rng>(
    size: BoardSize,
    catalog: &WordCatalog,
    stats: &mut StatsTracker,
    rng: &mut R,
) -> Result<(), String> {
    let Some(mut session) = RoundSession::with_random_target(size, catalog, rng) else {
        return Err(format!(
            "the word list has no {} letter words to play",
            size.letters()
        ));
    };

    display::print_round_intro(size);

    loop {
        let raw = get_user_input("\nPlease enter word -->")?;

        match session.submit(&raw, catalog, Instant::now()) {
            Submission::Rejected(GuessRejection::WrongLength { expected, .. }) => {
                println!(
                    "Invalid word entry - please enter a word that is {expected} characters long."
                );
            }
            Submission::Rejected(GuessRejection::NotInCatalog) => {
                println!("Not a playable word, please select another word.");
            }
            Submission::Accepted { outcome } => {
                display::print_board(session.history());

                match outcome {
                    None => {}
                    Some(RoundOutcome::Won {
                        attempts,
                        elapsed_secs,
                    }) => {
                        display::print_win(attempts, size.attempt_limit(), elapsed_secs);
                        stats.record_win(elapsed_secs);
                        return Ok(());
                    }
                    Some(RoundOutcome::TimedOut { over_by_secs }) => {
                        display::print_timeout(over_by_secs, size.time_limit_secs());
                        stats.record_loss();
                        return Ok(());
                    }
                    Some(RoundOutcome::AttemptsExhausted) => {
                        display::print_attempts_exhausted();
                        stats.record_loss();
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes_read == 0 {
        return Err("standard input closed".to_string());
    }

    Ok(input.trim().to_string())
}
