//! The statistics engine: per-player and cross-player metrics over a
//! dataset of sessions.
//!
//! The [`Analyzer`] is the single entry point. Hand it the sessions, the
//! roster, and a target roster index and it produces the full
//! [`PlayerReport`] for that player, caching the result by the structural
//! content of its inputs so repeated queries are free until
//! [`Analyzer::invalidate`] is called.
//!
//! The centerpiece is the group-size normalized win chance: winning a
//! heads-up round is a coin flip while winning a six-player round beats
//! five opponents, so raw "win chance with player X" figures gathered at
//! different table sizes don't compare. The analyzer rescales every
//! observed (wins, games) bucket to the dataset's largest table before
//! summing, which keeps wins-per-fair-share comparable across players
//! who favor different group sizes.
//!
//! # Example
//!
//! ```
//! use rs_rommee::analysis::{rank_by, Analyzer, LeaderboardKey, PlayerReport};
//! use rs_rommee::core::Player;
//! use rs_rommee::sheet::{RawRow, build_sessions};
//!
//! let roster = vec![
//!     Player::new("Alice", "player1"),
//!     Player::new("Bob", "player2"),
//! ];
//! let rows = vec![
//!     RawRow::new(vec![Some(0), Some(12)], false),
//!     RawRow::new(vec![Some(8), Some(0)], true),
//! ];
//! let sessions = build_sessions(&rows, roster.len()).unwrap();
//!
//! let analyzer = Analyzer::new();
//! let reports: Vec<PlayerReport> = (0..roster.len())
//!     .map(|idx| {
//!         PlayerReport::clone(&analyzer.analyze(&sessions, &roster, idx).unwrap())
//!     })
//!     .collect();
//!
//! let by_wins = rank_by(&reports, LeaderboardKey::Wins);
//! assert_eq!(by_wins[0].wins, 1);
//! ```

mod aggregator;
mod errors;
mod leaderboard;
mod metrics;
mod report;
mod tally;

#[cfg(test)]
pub(crate) mod test_util;

pub use aggregator::{Analyzer, AnalyzerConfig, Rounding, DEFAULT_RANKING_TOP_N};
pub use errors::{AnalyzeError, Result};
pub use leaderboard::{rank_by, LeaderboardKey};
pub use report::{GroupSizeLine, MaxPointsEntry, PairGroupSizeLine, PlayerReport, RoundRecord};
