//! Single-pass counting shared by the metric primitives.
//!
//! Several statistics reuse the same absent/won/lost classification and
//! the same group-size bucketing, so each is counted once per analysis
//! and the derived figures are read off the counts. The results are
//! identical to computing every statistic in its own pass.

use std::collections::BTreeMap;

use crate::core::{Player, Session};

use super::aggregator::Rounding;
use super::metrics::normalized_win_equiv;
use super::report::{GroupSizeLine, PairGroupSizeLine};

/// Round a float to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A count over a games denominator as a two-decimal percentage, `0` when
/// there were no games.
pub(crate) fn percent(count: usize, games: usize) -> f64 {
    if games == 0 {
        0.0
    } else {
        round2(100.0 * count as f64 / games as f64)
    }
}

/// Per-player round classification counts, tallied in one pass.
#[derive(Debug, Default, Clone)]
pub(crate) struct PlayerTally {
    pub games: usize,
    pub absences: usize,
    pub wins: usize,
    pub losses: usize,
    /// Wins in rounds carrying the Rommé hand flag.
    pub hand_wins: usize,
    /// Points left in every lost round, in dataset order.
    pub loss_scores: Vec<u32>,
}

impl PlayerTally {
    /// Tally every round of the dataset for the player at `target`.
    pub fn count(sessions: &[Session], target: usize) -> Self {
        let mut tally = PlayerTally::default();

        for session in sessions {
            for round in session.rounds() {
                let score = round.score(target);
                if score.is_absent() {
                    tally.absences += 1;
                    continue;
                }

                tally.games += 1;
                if score.is_win() {
                    tally.wins += 1;
                    if round.hand() {
                        tally.hand_wins += 1;
                    }
                } else if let Some(points) = score.loss_points() {
                    tally.losses += 1;
                    tally.loss_scores.push(points);
                }
            }
        }

        tally
    }

    /// Win percentage over played rounds.
    pub fn win_rate(&self) -> f64 {
        percent(self.wins, self.games)
    }

    /// Rommé hand win percentage over played rounds.
    pub fn hand_win_rate(&self) -> f64 {
        percent(self.hand_wins, self.games)
    }

    /// Mean points left over lost rounds, `0` with no losses.
    pub fn avg_points_left(&self) -> f64 {
        if self.loss_scores.is_empty() {
            0.0
        } else {
            let total: u64 = self.loss_scores.iter().map(|p| u64::from(*p)).sum();
            round2(total as f64 / self.loss_scores.len() as f64)
        }
    }

    /// Worst single-round points left, `0` with no losses.
    pub fn max_points_left(&self) -> u32 {
        self.loss_scores.iter().copied().max().unwrap_or(0)
    }

    /// Sum of points left over all lost rounds.
    pub fn total_points(&self) -> u64 {
        self.loss_scores.iter().map(|p| u64::from(*p)).sum()
    }

    /// Total points with every absence counted at the player's own
    /// average points left, rounded to the nearest integer under `rounding`.
    pub fn total_points_absences_averaged(&self, rounding: Rounding) -> u64 {
        let total = self.total_points() as f64 + self.absences as f64 * self.avg_points_left();
        rounding.to_nearest(total) as u64
    }
}

/// Group-size bucketed (wins, games) counts, tallied in one pass.
///
/// `own` buckets the target's played rounds by how many players were at
/// the table; `pairs` holds one bucket map per roster position counting
/// only rounds both the target and that player played. The maximum group
/// size is tracked over every round of the dataset, including rounds the
/// target sat out, since it is a property of the dataset rather than of
/// the player.
#[derive(Debug, Clone)]
pub(crate) struct GroupTally {
    target: usize,
    max_group_size: usize,
    own: BTreeMap<usize, (usize, usize)>,
    pairs: Vec<BTreeMap<usize, (usize, usize)>>,
}

impl GroupTally {
    /// Tally every round of the dataset for the player at `target`.
    pub fn count(sessions: &[Session], roster_len: usize, target: usize) -> Self {
        let mut max_group_size = 0;
        let mut own: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
        let mut pairs: Vec<BTreeMap<usize, (usize, usize)>> = vec![BTreeMap::new(); roster_len];

        for session in sessions {
            for round in session.rounds() {
                let group_size = round.group_size();
                max_group_size = max_group_size.max(group_size);

                let score = round.score(target);
                if score.is_absent() {
                    continue;
                }
                let won = score.is_win();

                let bucket = own.entry(group_size).or_insert((0, 0));
                bucket.1 += 1;
                if won {
                    bucket.0 += 1;
                }

                for other in round.present() {
                    if other == target {
                        continue;
                    }
                    let bucket = pairs[other].entry(group_size).or_insert((0, 0));
                    bucket.1 += 1;
                    if won {
                        bucket.0 += 1;
                    }
                }
            }
        }

        Self {
            target,
            // A dataset with no rounds normalizes against a heads-up table.
            max_group_size: if max_group_size == 0 { 2 } else { max_group_size },
            own,
            pairs,
        }
    }

    /// Largest group size observed anywhere in the dataset.
    pub fn max_group_size(&self) -> usize {
        self.max_group_size
    }

    /// Win percentage over the rounds shared with each other player.
    ///
    /// Every other roster member appears in the map, at `0` when no
    /// rounds were shared.
    pub fn win_chance_with(&self, roster: &[Player]) -> BTreeMap<String, f64> {
        self.others(roster)
            .map(|(idx, name)| {
                let (wins, games) = self.pairs[idx]
                    .values()
                    .fold((0, 0), |(w, g), (bw, bg)| (w + bw, g + bg));
                (name.to_string(), percent(wins, games))
            })
            .collect()
    }

    /// The shared-round win chances broken down by group size.
    ///
    /// Lines are ordered by roster position, then ascending group size;
    /// only observed buckets appear.
    pub fn win_chance_with_by_size(&self, roster: &[Player]) -> Vec<PairGroupSizeLine> {
        let mut lines = Vec::new();
        for (idx, name) in self.others(roster) {
            for (group_size, (wins, games)) in &self.pairs[idx] {
                let rate = 100.0 * *wins as f64 / *games as f64;
                let fair = 100.0 / *group_size as f64;
                lines.push(PairGroupSizeLine {
                    player: name.to_string(),
                    group_size: *group_size,
                    rate: round2(rate),
                    fair: round2(fair),
                    diff: round2(rate - fair),
                    games: *games,
                });
            }
        }
        lines
    }

    /// The shared-round win chances with every bucket rescaled to the
    /// dataset's maximum observed group size before summing.
    ///
    /// A win at a small table is cheaper than a win at a full one; the
    /// rescaling keeps the "wins per fair share of opportunity" semantics
    /// so players who mostly play small rounds aren't flattered.
    pub fn normalized_win_chance_with(&self, roster: &[Player]) -> BTreeMap<String, f64> {
        self.others(roster)
            .map(|(idx, name)| {
                let mut adj_wins = 0.0;
                let mut adj_games = 0.0;
                for (group_size, (wins, games)) in &self.pairs[idx] {
                    let (w, g) =
                        normalized_win_equiv(*wins, *games, *group_size, self.max_group_size);
                    adj_wins += w;
                    adj_games += g;
                }
                let rate = if adj_games > 0.0 {
                    round2(100.0 * adj_wins / adj_games)
                } else {
                    0.0
                };
                (name.to_string(), rate)
            })
            .collect()
    }

    /// The target's own win rate per observed group size, ascending.
    pub fn win_rate_by_size(&self) -> Vec<GroupSizeLine> {
        self.own
            .iter()
            .map(|(group_size, (wins, games))| {
                let rate = 100.0 * *wins as f64 / *games as f64;
                let fair = 100.0 / *group_size as f64;
                GroupSizeLine {
                    group_size: *group_size,
                    rate: round2(rate),
                    fair: round2(fair),
                    diff: round2(rate - fair),
                    games: *games,
                }
            })
            .collect()
    }

    fn others<'a>(&self, roster: &'a [Player]) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        let target = self.target;
        roster
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != target)
            .map(|(idx, player)| (idx, player.name.as_str()))
    }
}
