//! Round and statistics state

pub mod session;
pub mod stats;

pub use session::{GuessRejection, RoundOutcome, RoundSession, Submission};
pub use stats::{StatsSummary, StatsTracker};
