//! Round session state machine
//!
//! A session drives one round: a random target, an attempt budget, and a
//! time budget measured from the first accepted guess. Guesses of the wrong
//! length or missing from the catalog are rejected without consuming an
//! attempt slot; accepted guesses are scored and may end the round.

use crate::core::{BoardSize, FeedbackRow, Word};
use crate::wordlists::WordCatalog;
use rand::Rng;
use std::time::Instant;

/// State for a single round
#[derive(Debug)]
pub struct RoundSession {
    target: Word,
    size: BoardSize,
    attempts: usize,
    history: Vec<FeedbackRow>,
    timer_start: Option<Instant>,
}

/// Why a guess was rejected (no attempt consumed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    /// The guess length does not match the board
    WrongLength { expected: usize, actual: usize },
    /// The guess is not a playable word for this board
    NotInCatalog,
}

/// Terminal state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The guess matched the target within both budgets
    Won { attempts: usize, elapsed_secs: u64 },
    /// The time budget ran out; a winning-but-late guess lands here
    TimedOut { over_by_secs: u64 },
    /// The attempt budget ran out without a match
    AttemptsExhausted,
}

/// Result of submitting one line of input to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Invalid guess; the round state is unchanged
    Rejected(GuessRejection),
    /// The guess was scored; `None` means the round continues
    Accepted { outcome: Option<RoundOutcome> },
}

impl RoundSession {
    /// Start a round with a known target
    ///
    /// The target length must match the board size.
    #[must_use]
    pub fn new(target: Word, size: BoardSize) -> Self {
        debug_assert_eq!(target.len(), size.letters());

        Self {
            target,
            size,
            attempts: 0,
            history: Vec::new(),
            timer_start: None,
        }
    }

    /// Start a round with a target chosen uniformly at random from the
    /// catalog group for `size`
    ///
    /// Returns `None` if the group is empty.
    pub fn with_random_target<R: Rng + ?Sized>(
        size: BoardSize,
        catalog: &WordCatalog,
        rng: &mut R,
    ) -> Option<Self> {
        use rand::prelude::IndexedRandom;

        let target = catalog.group(size).choose(rng)?.clone();
        Some(Self::new(target, size))
    }

    /// Submit one line of input at time `now`
    ///
    /// Input is trimmed and lowercased before validation. The sequencing is:
    /// wrong length and unknown words are rejected without consuming an
    /// attempt; the timer starts at the first accepted guess; accepted
    /// guesses are scored and appended to the history; the timeout check
    /// precedes the win comparison, so a winning guess that arrives past the
    /// time limit is classified as `TimedOut`.
    pub fn submit(&mut self, raw: &str, catalog: &WordCatalog, now: Instant) -> Submission {
        let guess = raw.trim().to_lowercase();

        let expected = self.size.letters();
        if guess.len() != expected {
            return Submission::Rejected(GuessRejection::WrongLength {
                expected,
                actual: guess.len(),
            });
        }

        let Some(guess_word) = catalog.lookup(self.size, &guess) else {
            return Submission::Rejected(GuessRejection::NotInCatalog);
        };

        // Timer starts at the first accepted guess, not at round start
        let started = *self.timer_start.get_or_insert(now);

        self.attempts += 1;
        self.history.push(FeedbackRow::score(&self.target, guess_word));

        let elapsed_secs = now.duration_since(started).as_secs();
        let limit = self.size.time_limit_secs();

        let outcome = if elapsed_secs > limit {
            Some(RoundOutcome::TimedOut {
                over_by_secs: elapsed_secs - limit,
            })
        } else if guess == self.target.text() {
            Some(RoundOutcome::Won {
                attempts: self.attempts,
                elapsed_secs,
            })
        } else if self.attempts == self.size.attempt_limit() {
            Some(RoundOutcome::AttemptsExhausted)
        } else {
            None
        };

        Submission::Accepted { outcome }
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The board this round is played on
    #[inline]
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Accepted guesses so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Feedback rows for every accepted guess, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[FeedbackRow] {
        &self.history
    }
}
