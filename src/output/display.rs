//! Display functions for the interactive game

use super::formatters::{bracketed_row, format_average};
use crate::core::{BoardSize, FeedbackRow};
use crate::game::StatsSummary;
use colored::Colorize;

/// Print the welcome banner and game instructions
pub fn print_instructions() {
    println!("{}", "Wordle Reload".bright_cyan().bold());
    println!();
    println!("The objective of this game is to guess the randomly selected");
    println!("word within a given number of attempts. You can select either");
    println!("a three or five letter board.");
    println!("At the conclusion of the game, stats will be displayed.");
    println!("Indicators will be given if characters of the user entered");
    println!("word are reflected in the guessed word.");
    println!("  - If the character is in the correct position, the character");
    println!("    will display as an uppercase value.");
    println!("  - If the character is within the random word, the character");
    println!("    will display as a lowercase value.");
    println!("  - If you enter a character that is not in the word, an asterisk '*'");
    println!("    will display.");
    println!();
}

/// Print the menu options
pub fn print_menu() {
    println!("\nSelect a menu option:");
    println!("  1. To play Wordle Reload 3 letter play");
    println!("  2. To play Wordle Reload 5 letter play");
    println!("  3. Exit the program");
}

/// Print the round introduction with its attempt and time budgets
pub fn print_round_intro(size: BoardSize) {
    println!(
        "\nTo get started, enter your first {} letter word.",
        size.letters()
    );
    println!(
        "You have {} attempts to guess the random word.",
        size.attempt_limit()
    );
    println!("The timer will start after your first word entry.");
    println!(
        "Try to guess the word within {} seconds.",
        size.time_limit_secs()
    );
}

/// Print the full board: every accepted guess's feedback row, oldest first
pub fn print_board(history: &[FeedbackRow]) {
    println!("\n");
    for row in history {
        println!("{}", bracketed_row(row));
    }
}

/// Print the win banner with attempts used and time taken
pub fn print_win(attempts: usize, attempt_limit: usize, elapsed_secs: u64) {
    println!(
        "\n{}",
        "Nice Work!  You guessed the correct word"
            .bright_green()
            .bold()
    );
    println!("  - You completed the board in: {elapsed_secs} seconds.");
    println!("  - It took you {attempts}/{attempt_limit} attempts.");
}

/// Print the timeout message with how far past the limit the guess landed
pub fn print_timeout(over_by_secs: u64, limit_secs: u64) {
    println!("{}", "Your time has expired.  Try again.".red());
    println!("  - You are {over_by_secs} seconds over the {limit_secs} second time limit.");
}

/// Print the attempts-exhausted message
pub fn print_attempts_exhausted() {
    println!(
        "\n{}",
        "Maximum amount of attempts have been reached. Try again.".red()
    );
}

/// Print the invalid-menu-selection message
pub fn print_invalid_menu_choice() {
    println!("\n{}", "Invalid menu option, please try again!".red());
}

/// Print the end-of-session stats summary
pub fn print_stats_summary(summary: &StatsSummary) {
    println!("\n{}", "Overall Stats:".bright_cyan().bold());
    println!("  - You guessed: {}", summary.total_correct);
    println!("  - Your longest streak is: {}", summary.longest_streak);
    println!(
        "  - Average word completion time: {}",
        format_average(summary.average_secs)
    );
    println!("Exiting program");
}
