use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::event;

use crate::core::{Player, Session};

use super::errors::{AnalyzeError, Result};
use super::metrics;
use super::report::PlayerReport;
use super::tally::{round2, GroupTally, PlayerTally};

/// Default depth of the global max-points ranking.
pub const DEFAULT_RANKING_TOP_N: usize = 25;

/// How a fractional point total is rounded to a whole number.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Rounding {
    /// Ties round away from zero, 12.5 becomes 13.
    HalfUp,
    /// Ties round to the even neighbor, 12.5 becomes 12.
    #[default]
    HalfEven,
}

impl Rounding {
    /// Round `value` to the nearest integer under this rule.
    pub(crate) fn to_nearest(self, value: f64) -> f64 {
        match self {
            Rounding::HalfUp => value.round(),
            Rounding::HalfEven => value.round_ties_even(),
        }
    }
}

/// Configuration for an [`Analyzer`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct AnalyzerConfig {
    /// Rounding rule for the absence-as-average point total.
    pub rounding: Rounding,
    /// Depth of the global max-points ranking.
    pub ranking_top_n: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            rounding: Rounding::default(),
            ranking_top_n: DEFAULT_RANKING_TOP_N,
        }
    }
}

/// The statistics engine: computes full [`PlayerReport`]s and caches them
/// by input identity.
///
/// The analyzer is the single entry point collaborators call. It owns its
/// result cache, keyed by a structural hash over the sessions, the
/// roster, and the target index, so repeated queries for the same player
/// over the same dataset never recompute. The cache lives behind a lock;
/// the computation itself is pure, takes no locks, and different target
/// players over the same immutable inputs can be analyzed from different
/// threads.
///
/// The cache never expires on its own. Callers that load new rows call
/// [`Analyzer::invalidate`].
///
/// # Example
///
/// ```
/// use rs_rommee::analysis::Analyzer;
/// use rs_rommee::core::Player;
/// use rs_rommee::sheet::{RawRow, build_sessions};
///
/// let roster = vec![
///     Player::new("Alice", "player1"),
///     Player::new("Bob", "player2"),
///     Player::new("Cara", "player3"),
/// ];
/// let rows = vec![
///     RawRow::new(vec![Some(0), Some(8), Some(7)], false),
///     RawRow::new(vec![Some(10), Some(0), Some(15)], false),
/// ];
/// let sessions = build_sessions(&rows, roster.len()).unwrap();
///
/// let analyzer = Analyzer::new();
/// let report = analyzer.analyze(&sessions, &roster, 0).unwrap();
/// assert_eq!(report.games, 2);
/// assert_eq!(report.wins, 1);
/// assert_eq!(report.win_rate, 50.0);
/// ```
#[derive(Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    cache: RwLock<HashMap<u64, Arc<PlayerReport>>>,
}

impl Analyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The configuration this analyzer was built with.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Compute, or fetch from cache, the full report for the player at
    /// `target` in the roster.
    ///
    /// An empty dataset produces an all-zero report rather than an error.
    /// A `target` outside the roster is a contract violation and fails
    /// with [`AnalyzeError::TargetOutOfRange`]; it is never clamped.
    pub fn analyze(
        &self,
        sessions: &[Session],
        roster: &[Player],
        target: usize,
    ) -> Result<Arc<PlayerReport>> {
        if target >= roster.len() {
            return Err(AnalyzeError::TargetOutOfRange {
                target,
                roster: roster.len(),
            });
        }

        let key = cache_key(sessions, roster, target);

        // A poisoned lock only means some other analysis panicked; the
        // map itself is still valid.
        let cached = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(report) = cached {
            event!(
                tracing::Level::DEBUG,
                target_idx = target,
                player = %report.player,
                "Returning cached report"
            );
            return Ok(report);
        }

        event!(
            tracing::Level::INFO,
            target_idx = target,
            num_sessions = sessions.len(),
            roster_len = roster.len(),
            "Analyzing player"
        );

        let report = Arc::new(build_report(sessions, roster, target, &self.config));

        // Insert-if-absent: if another caller computed the same report
        // concurrently, everyone ends up sharing one stored value.
        let report = self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(report)
            .clone();

        Ok(report)
    }

    /// Drop every cached report. Call after new rows arrive.
    pub fn invalidate(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        event!(
            tracing::Level::DEBUG,
            dropped = cache.len(),
            "Invalidating report cache"
        );
        cache.clear();
    }

    /// Number of reports currently cached.
    pub fn cached_reports(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Structural hash over the full analysis input.
fn cache_key(sessions: &[Session], roster: &[Player], target: usize) -> u64 {
    let mut hasher = DefaultHasher::new();
    sessions.hash(&mut hasher);
    roster.hash(&mut hasher);
    target.hash(&mut hasher);
    hasher.finish()
}

/// Run every metric primitive and assemble the bundle.
fn build_report(
    sessions: &[Session],
    roster: &[Player],
    target: usize,
    config: &AnalyzerConfig,
) -> PlayerReport {
    let tally = PlayerTally::count(sessions, target);
    let groups = GroupTally::count(sessions, roster.len(), target);

    let session_wins = metrics::session_win_counts(sessions, target);
    let session_points = metrics::session_point_totals(sessions, target);
    let max_points_left = tally.max_points_left();

    let max_points_ranking = metrics::max_points_ranking(sessions, roster, config.ranking_top_n);
    let max_points_rank =
        metrics::player_max_rank(&max_points_ranking, &roster[target].name, max_points_left);
    let (win_rank, win_rate_rank) = metrics::win_ranks(sessions, roster, target);

    let avg_wins_per_session = if session_wins.is_empty() {
        0.0
    } else {
        round2(session_wins.iter().sum::<usize>() as f64 / session_wins.len() as f64)
    };
    let avg_points_per_session = if session_points.is_empty() {
        0.0
    } else {
        round2(session_points.iter().sum::<u64>() as f64 / session_points.len() as f64)
    };

    PlayerReport {
        player: roster[target].name.clone(),
        games: tally.games,
        absences: tally.absences,
        wins: tally.wins,
        losses: tally.losses,
        hand_wins: tally.hand_wins,
        win_rate: tally.win_rate(),
        hand_win_rate: tally.hand_win_rate(),
        avg_points_left: tally.avg_points_left(),
        max_points_left,
        total_points: tally.total_points(),
        total_points_absences_averaged: tally.total_points_absences_averaged(config.rounding),
        sessions: sessions.len(),
        avg_wins_per_session,
        best_session_wins: session_wins.iter().copied().max().unwrap_or(0),
        worst_session_wins: session_wins.iter().copied().min().unwrap_or(0),
        session_wins,
        avg_points_per_session,
        longest_streak: metrics::longest_streak(sessions, target),
        longest_session_streak: metrics::longest_session_streak(sessions, target),
        rounds: metrics::round_records(sessions, target),
        max_points_ranking,
        max_points_rank,
        win_rank,
        win_rate_rank,
        win_chance_with: groups.win_chance_with(roster),
        win_chance_with_by_size: groups.win_chance_with_by_size(roster),
        normalized_win_chance_with: groups.normalized_win_chance_with(roster),
        win_rate_by_size: groups.win_rate_by_size(),
        max_group_size: groups.max_group_size(),
    }
}
