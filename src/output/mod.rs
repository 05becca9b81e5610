//! Terminal output formatting
//!
//! Display utilities for the interactive game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_attempts_exhausted, print_board, print_instructions, print_invalid_menu_choice,
    print_menu, print_round_intro, print_stats_summary, print_timeout, print_win,
};
