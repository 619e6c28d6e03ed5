use std::collections::BTreeMap;

use crate::core::Score;

/// One per-round entry of a player's full score history.
///
/// The summarization side consumes these as raw (score, flag) pairs; any
/// prose or string formatting built on top of them is presentation and
/// happens elsewhere.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct RoundRecord {
    /// 1-based session number the round belongs to.
    pub session: usize,
    /// 1-based running round number across the whole dataset.
    pub round: usize,
    /// The player's final score for the round.
    pub score: Score,
    /// Whether the round was won with a Rommé hand.
    pub hand: bool,
}

/// One entry of the global max-points ranking.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct MaxPointsEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Name of the player the points belong to.
    pub player: String,
    /// Points left in hand in that round.
    pub points: u32,
}

/// The target player's own win rate at one observed group size.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct GroupSizeLine {
    /// Number of players present in the bucketed rounds.
    pub group_size: usize,
    /// Observed win rate in percent.
    pub rate: f64,
    /// The fair baseline, `100 / group_size`.
    pub fair: f64,
    /// `rate - fair`.
    pub diff: f64,
    /// Games played at this group size.
    pub games: usize,
}

/// Win rate alongside one other player at one observed group size.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct PairGroupSizeLine {
    /// The other player's name.
    pub player: String,
    /// Number of players present in the bucketed rounds.
    pub group_size: usize,
    /// Observed win rate in percent over rounds both players played.
    pub rate: f64,
    /// The fair baseline, `100 / group_size`.
    pub fair: f64,
    /// `rate - fair`.
    pub diff: f64,
    /// Shared games at this group size.
    pub games: usize,
}

/// The full metric bundle for one player over one dataset.
///
/// Reports are assembled once by the analyzer and cached; all fields are
/// plain data. Percentages are in percent, rounded to two decimals, and
/// every ratio degrades to `0` rather than failing when its denominator
/// is zero, so a brand new player always gets a well formed report.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct PlayerReport {
    /// Name of the analyzed player.
    pub player: String,

    // Round counts
    /// Rounds the player actually played.
    pub games: usize,
    /// Rounds the player sat out.
    pub absences: usize,
    /// Rounds won outright.
    pub wins: usize,
    /// Rounds lost with points left in hand.
    pub losses: usize,
    /// Wins scored in rounds carrying the Rommé hand flag.
    pub hand_wins: usize,

    // Rates and points
    /// Percentage of played rounds that were won.
    pub win_rate: f64,
    /// Percentage of played rounds won with a Rommé hand.
    pub hand_win_rate: f64,
    /// Mean points left over all lost rounds.
    pub avg_points_left: f64,
    /// Worst single-round points left.
    pub max_points_left: u32,
    /// Sum of points left over all lost rounds, absences counted as zero.
    pub total_points: u64,
    /// Sum of points left with every absence counted at the player's own
    /// average points left, rounded per the analyzer's rounding rule.
    pub total_points_absences_averaged: u64,

    // Session breakdown
    /// Number of sessions in the dataset.
    pub sessions: usize,
    /// Wins per session, in session order.
    pub session_wins: Vec<usize>,
    /// Mean of `session_wins`.
    pub avg_wins_per_session: f64,
    /// Best single-session win count.
    pub best_session_wins: usize,
    /// Worst single-session win count.
    pub worst_session_wins: usize,
    /// Mean over sessions of the points left summed within the session.
    pub avg_points_per_session: f64,

    // Streaks
    /// Longest run of consecutive wins across the whole dataset. Losses
    /// and absences break the run; session boundaries do not.
    pub longest_streak: usize,
    /// Longest run of consecutive wins within any single session.
    pub longest_session_streak: usize,

    // Raw history
    /// Per-round (score, hand flag) history in dataset order.
    pub rounds: Vec<RoundRecord>,

    // Cross-player rankings
    /// The global top-N distinct (player, points) loss ranking.
    pub max_points_ranking: Vec<MaxPointsEntry>,
    /// The player's rank in that ranking for their own worst loss, `None`
    /// when they don't appear in it.
    pub max_points_rank: Option<usize>,
    /// 1-based rank among all players by total wins, `None` only for an
    /// empty roster.
    pub win_rank: Option<usize>,
    /// 1-based rank among all players by win rate.
    pub win_rate_rank: Option<usize>,

    // Cross-player win chances
    /// Per other player: percentage of shared rounds the target won.
    pub win_chance_with: BTreeMap<String, f64>,
    /// The same figures broken down by group size.
    pub win_chance_with_by_size: Vec<PairGroupSizeLine>,
    /// The shared-round win chances rescaled to the dataset's maximum
    /// observed group size, so figures gathered at different table sizes
    /// compare fairly.
    pub normalized_win_chance_with: BTreeMap<String, f64>,
    /// The player's own win rate bucketed by group size.
    pub win_rate_by_size: Vec<GroupSizeLine>,
    /// Largest group size observed anywhere in the dataset.
    pub max_group_size: usize,
}

impl PlayerReport {
    /// Serialize the report to pretty JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
