//! Per-character guess feedback
//!
//! Scoring a guess against a target produces one mark per position:
//! - `Hit`: the letter sits in the correct position, displayed uppercase
//! - `Near`: the letter appears elsewhere in the target, displayed lowercase
//! - `Miss`: the letter does not appear in the target, displayed as `*`
//!
//! Known deviation from standard Wordle rules: `Near` marks are not budgeted
//! by how often the letter occurs in the target. A letter already consumed by
//! a `Hit` cell still shows `Near` at its other guessed positions.

use super::Word;
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Correct letter in the correct position
    Hit(u8),
    /// Letter present in the target at some other position
    Near(u8),
    /// Letter absent from the target
    Miss,
}

impl Mark {
    /// The display character for this mark
    ///
    /// `Hit` renders as the uppercase letter, `Near` as the lowercase letter,
    /// `Miss` as an asterisk.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Hit(letter) => letter.to_ascii_uppercase() as char,
            Self::Near(letter) => letter.to_ascii_lowercase() as char,
            Self::Miss => '*',
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRow(Vec<Mark>);

impl FeedbackRow {
    /// Score `guess` against `target`
    ///
    /// Both words must have the same length. Per position `i`:
    /// 1. the guessed letter is absent from the target → `Miss`;
    /// 2. the first occurrence of the letter in the target at index >= `i`
    ///    is exactly `i` → `Hit`;
    /// 3. otherwise → `Near`.
    ///
    /// Pure and stateless.
    ///
    /// # Examples
    /// ```
    /// use wordle_reload::core::{FeedbackRow, Word};
    ///
    /// let target = Word::new("cat").unwrap();
    /// let guess = Word::new("dot").unwrap();
    /// assert_eq!(FeedbackRow::score(&target, &guess).text(), "**T");
    /// ```
    #[must_use]
    pub fn score(target: &Word, guess: &Word) -> Self {
        debug_assert_eq!(target.len(), guess.len());

        let marks = (0..guess.len())
            .map(|i| {
                let letter = guess.char_at(i);

                if !target.has_letter(letter) {
                    Mark::Miss
                } else if first_position_at_or_after(target, letter, i) == Some(i) {
                    Mark::Hit(letter)
                } else {
                    Mark::Near(letter)
                }
            })
            .collect();

        Self(marks)
    }

    /// The marks, one per guessed position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of cells in the row
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The row as a plain string, e.g. `**T`
    #[must_use]
    pub fn text(&self) -> String {
        self.0.iter().map(|mark| mark.glyph()).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// First position of `letter` in `word` at index >= `from`
fn first_position_at_or_after(word: &Word, letter: u8, from: usize) -> Option<usize> {
    word.positions_of(letter)
        .iter()
        .copied()
        .find(|&position| position >= from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(target: &str, guess: &str) -> FeedbackRow {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        FeedbackRow::score(&target, &guess)
    }

    #[test]
    fn row_length_matches_guess() {
        assert_eq!(row("cat", "dog").len(), 3);
        assert_eq!(row("crane", "slate").len(), 5);
    }

    #[test]
    fn self_match_is_all_hits() {
        for word in ["cat", "dog", "crane", "slate"] {
            assert_eq!(row(word, word).text(), word.to_uppercase());
        }
    }

    #[test]
    fn absent_letters_are_misses() {
        assert_eq!(row("cat", "dog").text(), "***");
        assert_eq!(row("fghij", "abcde").text(), "*****");
    }

    #[test]
    fn displaced_letter_is_near() {
        // T is in CAT but not at position 0
        assert_eq!(row("cat", "tag").text(), "tA*");
    }

    #[test]
    fn worked_example_cat_dot() {
        // D not in CAT, O not in CAT, T in CAT at the guessed position
        assert_eq!(row("cat", "dot").text(), "**T");
    }

    #[test]
    fn mixed_five_letter_example() {
        // CRANE vs SLATE: S, L, T absent; A and E in place
        assert_eq!(row("crane", "slate").text(), "**A*E");
    }

    #[test]
    fn near_marks_ignore_letter_counts() {
        // Target BOB has two Bs, both matched in place by the guess. The
        // middle B still shows Near even though no unmatched B remains;
        // standard Wordle would show B*B.
        assert_eq!(row("bob", "bbb").text(), "BbB");
    }

    #[test]
    fn repeated_letter_target_positional_match() {
        // EEL vs LEE: L displaced, first E placed, second E displaced
        assert_eq!(row("eel", "lee").text(), "lEe");
    }

    #[test]
    fn every_cell_is_star_or_cased_letter() {
        for (target, guess) in [("cat", "dot"), ("crane", "speed"), ("bob", "bbb")] {
            for mark in row(target, guess).marks() {
                match mark {
                    Mark::Hit(letter) => assert!(letter.is_ascii_lowercase()),
                    Mark::Near(letter) => assert!(letter.is_ascii_lowercase()),
                    Mark::Miss => {}
                }
                let glyph = mark.glyph();
                assert!(glyph == '*' || glyph.is_ascii_alphabetic());
            }
        }
    }

    #[test]
    fn mark_glyphs() {
        assert_eq!(Mark::Hit(b't').glyph(), 'T');
        assert_eq!(Mark::Near(b't').glyph(), 't');
        assert_eq!(Mark::Miss.glyph(), '*');
    }

    #[test]
    fn row_display_matches_text() {
        let feedback = row("cat", "dot");
        assert_eq!(format!("{feedback}"), feedback.text());
    }
}
