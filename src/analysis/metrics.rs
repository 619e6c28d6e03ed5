//! Metric primitives over the session model.
//!
//! Everything in here is a deterministic pure function of the sessions
//! and a target roster index (the cross-player primitives also take the
//! roster). The shared classification counts live in
//! [`tally`](super::tally); this module holds the scans that need round
//! order (streaks, per-session breakdowns, history records) and the
//! cross-player rankings.

use std::collections::HashSet;

use crate::core::{Player, Session};

use super::report::{MaxPointsEntry, RoundRecord};
use super::tally::PlayerTally;

/// Longest run of consecutive wins across the whole dataset.
///
/// A loss or an absence breaks the run; a session boundary does not. A
/// player who wins the last round of one evening and the first rounds of
/// the next keeps the streak alive.
pub(crate) fn longest_streak(sessions: &[Session], target: usize) -> usize {
    let mut best = 0;
    let mut run = 0;
    for session in sessions {
        for round in session.rounds() {
            if round.score(target).is_win() {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
    }
    best
}

/// Longest run of consecutive wins within any single session.
pub(crate) fn longest_session_streak(sessions: &[Session], target: usize) -> usize {
    let mut best = 0;
    for session in sessions {
        let mut run = 0;
        for round in session.rounds() {
            if round.score(target).is_win() {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
    }
    best
}

/// Wins per session, in session order.
pub(crate) fn session_win_counts(sessions: &[Session], target: usize) -> Vec<usize> {
    sessions
        .iter()
        .map(|session| {
            session
                .rounds()
                .iter()
                .filter(|round| round.score(target).is_win())
                .count()
        })
        .collect()
}

/// Summed points left per session, in session order.
pub(crate) fn session_point_totals(sessions: &[Session], target: usize) -> Vec<u64> {
    sessions
        .iter()
        .map(|session| {
            session
                .rounds()
                .iter()
                .filter_map(|round| round.score(target).loss_points())
                .map(u64::from)
                .sum()
        })
        .collect()
}

/// The target's full per-round history in dataset order.
pub(crate) fn round_records(sessions: &[Session], target: usize) -> Vec<RoundRecord> {
    let mut records = Vec::new();
    let mut round_no = 1;
    for (session_idx, session) in sessions.iter().enumerate() {
        for round in session.rounds() {
            records.push(RoundRecord {
                session: session_idx + 1,
                round: round_no,
                score: round.score(target),
                hand: round.hand(),
            });
            round_no += 1;
        }
    }
    records
}

/// The global top-`top_n` distinct (player, points) loss pairs.
///
/// Sorted descending by points. The sort is stable, so ties keep the
/// order in which the pairs were first encountered walking sessions
/// outermost, then the roster, then rounds; duplicates of a pair are
/// dropped. Ranks are the 1-based positions in the resulting list.
pub(crate) fn max_points_ranking(
    sessions: &[Session],
    roster: &[Player],
    top_n: usize,
) -> Vec<MaxPointsEntry> {
    let mut losses: Vec<(u32, usize)> = Vec::new();
    for session in sessions {
        for idx in 0..roster.len() {
            for round in session.rounds() {
                if let Some(points) = round.score(idx).loss_points() {
                    losses.push((points, idx));
                }
            }
        }
    }
    losses.sort_by(|a, b| b.0.cmp(&a.0));

    let mut seen: HashSet<(&str, u32)> = HashSet::new();
    let mut ranking = Vec::new();
    for (points, idx) in losses {
        let name = roster[idx].name.as_str();
        if seen.insert((name, points)) {
            ranking.push(MaxPointsEntry {
                rank: ranking.len() + 1,
                player: name.to_string(),
                points,
            });
            if ranking.len() >= top_n {
                break;
            }
        }
    }
    ranking
}

/// The rank of `(name, points)` within the global max-points ranking.
pub(crate) fn player_max_rank(
    ranking: &[MaxPointsEntry],
    name: &str,
    points: u32,
) -> Option<usize> {
    ranking
        .iter()
        .find(|entry| entry.player == name && entry.points == points)
        .map(|entry| entry.rank)
}

/// The target's 1-based rank among all players by total wins and,
/// independently, by win rate, both descending.
///
/// Sorts are stable, so tied players keep roster order. `None` only for
/// an empty roster.
pub(crate) fn win_ranks(
    sessions: &[Session],
    roster: &[Player],
    target: usize,
) -> (Option<usize>, Option<usize>) {
    if roster.is_empty() {
        return (None, None);
    }

    let standings: Vec<(usize, usize, f64)> = (0..roster.len())
        .map(|idx| {
            let tally = PlayerTally::count(sessions, idx);
            let rate = if tally.games == 0 {
                0.0
            } else {
                100.0 * tally.wins as f64 / tally.games as f64
            };
            (idx, tally.wins, rate)
        })
        .collect();

    let mut by_wins = standings.clone();
    by_wins.sort_by(|a, b| b.1.cmp(&a.1));
    let win_rank = by_wins
        .iter()
        .position(|(idx, _, _)| *idx == target)
        .map(|pos| pos + 1);

    let mut by_rate = standings;
    by_rate.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
    let win_rate_rank = by_rate
        .iter()
        .position(|(idx, _, _)| *idx == target)
        .map(|pos| pos + 1);

    (win_rank, win_rate_rank)
}

/// Rescale a (wins, games) pair observed at `actual_size` players to its
/// equivalent at `target_size` players.
///
/// Fair win probability is `1 / group size`, so the conversion factor is
/// `(1 / target_size) / (1 / actual_size) = actual_size / target_size`,
/// applied to wins and games alike. Group sizes of one or below and empty
/// buckets carry no information and contribute `(0, 0)`.
pub(crate) fn normalized_win_equiv(
    wins: usize,
    games: usize,
    actual_size: usize,
    target_size: usize,
) -> (f64, f64) {
    if actual_size <= 1 || target_size <= 1 || games == 0 {
        return (0.0, 0.0);
    }
    let factor = actual_size as f64 / target_size as f64;
    (wins as f64 * factor, games as f64 * factor)
}
