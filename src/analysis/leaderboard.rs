//! Ranked tables over a set of player reports.
//!
//! The presentation side renders one leaderboard per statistic; the sort
//! orders live here because some of them are multi-key (wins break ties
//! on win rate) and because "lower is better" differs per statistic:
//! point statistics rank ascending, everything else descending.

use std::cmp::Ordering;

use super::report::PlayerReport;

/// The statistic a leaderboard is ranked by.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LeaderboardKey {
    /// Games played, descending.
    Games,
    /// Total wins, descending, win rate as tiebreak.
    Wins,
    /// Win rate, descending.
    WinRate,
    /// Average points left, ascending.
    AvgPointsLeft,
    /// Worst single-round points left, descending.
    MaxPointsLeft,
    /// Best single-session win count, descending.
    BestSessionWins,
    /// Total points with absences as zero, ascending.
    TotalPoints,
    /// Total points with absences averaged, ascending.
    TotalPointsAbsencesAveraged,
}

/// Rank reports by the given key.
///
/// The sort is stable, so players tied on the key keep their input
/// (roster) order. Returns references in ranked order; the reports
/// themselves are untouched.
pub fn rank_by<'a>(reports: &'a [PlayerReport], key: LeaderboardKey) -> Vec<&'a PlayerReport> {
    let mut ranked: Vec<&PlayerReport> = reports.iter().collect();
    ranked.sort_by(|a, b| compare(a, b, key));
    ranked
}

fn compare(a: &PlayerReport, b: &PlayerReport, key: LeaderboardKey) -> Ordering {
    match key {
        LeaderboardKey::Games => b.games.cmp(&a.games),
        LeaderboardKey::Wins => b
            .wins
            .cmp(&a.wins)
            .then(float_desc(a.win_rate, b.win_rate)),
        LeaderboardKey::WinRate => float_desc(a.win_rate, b.win_rate),
        LeaderboardKey::AvgPointsLeft => float_asc(a.avg_points_left, b.avg_points_left),
        LeaderboardKey::MaxPointsLeft => b.max_points_left.cmp(&a.max_points_left),
        LeaderboardKey::BestSessionWins => b.best_session_wins.cmp(&a.best_session_wins),
        LeaderboardKey::TotalPoints => a.total_points.cmp(&b.total_points),
        LeaderboardKey::TotalPointsAbsencesAveraged => a
            .total_points_absences_averaged
            .cmp(&b.total_points_absences_averaged),
    }
}

/// Descending float order with ties treated as equal.
fn float_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Ascending float order with ties treated as equal.
fn float_asc(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_util::{demo_sessions, round, roster};
    use crate::analysis::Analyzer;
    use crate::core::Session;

    fn reports() -> Vec<PlayerReport> {
        let (sessions, players) = demo_sessions();
        let analyzer = Analyzer::new();
        (0..players.len())
            .map(|idx| {
                PlayerReport::clone(&analyzer.analyze(&sessions, &players, idx).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_rank_by_wins() {
        let reports = reports();
        let ranked = rank_by(&reports, LeaderboardKey::Wins);
        for pair in ranked.windows(2) {
            assert!(pair[0].wins >= pair[1].wins);
        }
    }

    #[test]
    fn test_rank_by_wins_breaks_ties_on_win_rate() {
        let players = roster(&["A", "B"]);
        // Both win once; A needs two games for it, B only one.
        let sessions = vec![Session::new(vec![
            round(&[Some(0), None], false),
            round(&[Some(5), None], false),
            round(&[Some(4), Some(0)], false),
        ])];

        let analyzer = Analyzer::new();
        let reports: Vec<PlayerReport> = (0..2)
            .map(|idx| PlayerReport::clone(&analyzer.analyze(&sessions, &players, idx).unwrap()))
            .collect();

        let ranked = rank_by(&reports, LeaderboardKey::Wins);
        assert_eq!(ranked[0].player, "B");
        assert_eq!(ranked[1].player, "A");
    }

    #[test]
    fn test_point_tables_rank_ascending() {
        let reports = reports();

        let by_avg = rank_by(&reports, LeaderboardKey::AvgPointsLeft);
        for pair in by_avg.windows(2) {
            assert!(pair[0].avg_points_left <= pair[1].avg_points_left);
        }

        let by_total = rank_by(&reports, LeaderboardKey::TotalPoints);
        for pair in by_total.windows(2) {
            assert!(pair[0].total_points <= pair[1].total_points);
        }

        let by_total_avg = rank_by(&reports, LeaderboardKey::TotalPointsAbsencesAveraged);
        for pair in by_total_avg.windows(2) {
            assert!(
                pair[0].total_points_absences_averaged <= pair[1].total_points_absences_averaged
            );
        }
    }

    #[test]
    fn test_count_tables_rank_descending() {
        let reports = reports();

        let by_games = rank_by(&reports, LeaderboardKey::Games);
        for pair in by_games.windows(2) {
            assert!(pair[0].games >= pair[1].games);
        }

        let by_rate = rank_by(&reports, LeaderboardKey::WinRate);
        for pair in by_rate.windows(2) {
            assert!(pair[0].win_rate >= pair[1].win_rate);
        }

        let by_max = rank_by(&reports, LeaderboardKey::MaxPointsLeft);
        for pair in by_max.windows(2) {
            assert!(pair[0].max_points_left >= pair[1].max_points_left);
        }

        let by_best = rank_by(&reports, LeaderboardKey::BestSessionWins);
        for pair in by_best.windows(2) {
            assert!(pair[0].best_session_wins >= pair[1].best_session_wins);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let players = roster(&["A", "B"]);
        // Fully symmetric: one win each from two shared rounds.
        let sessions = vec![Session::new(vec![
            round(&[Some(0), Some(5)], false),
            round(&[Some(5), Some(0)], false),
        ])];

        let analyzer = Analyzer::new();
        let reports: Vec<PlayerReport> = (0..2)
            .map(|idx| PlayerReport::clone(&analyzer.analyze(&sessions, &players, idx).unwrap()))
            .collect();

        for key in [
            LeaderboardKey::Games,
            LeaderboardKey::Wins,
            LeaderboardKey::WinRate,
            LeaderboardKey::TotalPoints,
        ] {
            let ranked = rank_by(&reports, key);
            assert_eq!(ranked[0].player, "A", "ties should keep roster order");
            assert_eq!(ranked[1].player, "B");
        }
    }

    #[test]
    fn test_rank_by_empty_reports() {
        let ranked = rank_by(&[], LeaderboardKey::Wins);
        assert!(ranked.is_empty());
    }
}
