//! Cross-round statistics
//!
//! Aggregates outcomes while the program runs: total rounds won, the current
//! and longest win streaks, and the cumulative seconds spent on won rounds.

/// Running statistics across rounds
#[derive(Debug, Default, Clone)]
pub struct StatsTracker {
    total_correct: u32,
    current_streak: u32,
    longest_streak: u32,
    total_secs: u64,
}

/// Snapshot of the stats for the end-of-session display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_correct: u32,
    pub longest_streak: u32,
    /// `None` when no streak has been recorded yet
    pub average_secs: Option<u64>,
}

impl StatsTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a won round and its time-to-solve
    pub fn record_win(&mut self, elapsed_secs: u64) {
        self.total_correct += 1;
        self.current_streak += 1;
        if self.current_streak > self.longest_streak {
            self.longest_streak = self.current_streak;
        }
        self.total_secs += elapsed_secs;
    }

    /// Record a lost round (timeout or attempts exhausted)
    ///
    /// The current streak ends; the longest streak is raised first if the
    /// ending streak beats it.
    pub fn record_loss(&mut self) {
        if self.current_streak > self.longest_streak {
            self.longest_streak = self.current_streak;
        }
        self.current_streak = 0;
    }

    /// Consecutive wins since the last loss
    #[inline]
    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Snapshot for display
    ///
    /// The average divides cumulative time by the longest streak, not by the
    /// win count.
    #[must_use]
    pub fn summary(&self) -> StatsSummary {
        let average_secs = if self.longest_streak > 0 {
            Some(self.total_secs / u64::from(self.longest_streak))
        } else {
            None
        };

        StatsSummary {
            total_correct: self.total_correct,
            longest_streak: self.longest_streak,
            average_secs,
        }
    }

    /// Zero all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
