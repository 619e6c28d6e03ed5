use super::Score;

/// One dealt hand: a score for every roster position plus the shared
/// Rommé hand flag.
///
/// The flag belongs to the round, not to any single player. When it is
/// set, the winner went out in one meld and every other player's points
/// left are doubled. The constructor applies that doubling, so a
/// constructed round always carries final scores and the statistics layer
/// never has to re-derive them.
///
/// Rounds are immutable once constructed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Round {
    scores: Vec<Score>,
    hand: bool,
}

impl Round {
    /// Build a round from the scores as they were recorded on the sheet.
    ///
    /// `scores` must be in roster order, one entry per player. When `hand`
    /// is set every non-zero counted score is doubled; wins and absences
    /// are unaffected and the flag stays recorded on the round.
    pub fn new(scores: Vec<Score>, hand: bool) -> Self {
        let scores = if hand {
            scores.into_iter().map(Score::doubled).collect()
        } else {
            scores
        };
        Self { scores, hand }
    }

    /// The final score for the player at `player_idx` in roster order.
    ///
    /// # Panics
    ///
    /// Panics if `player_idx` is outside the roster this round was built
    /// for.
    pub fn score(&self, player_idx: usize) -> Score {
        self.scores[player_idx]
    }

    /// All final scores in roster order.
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Whether this round was won with a Rommé hand.
    pub fn hand(&self) -> bool {
        self.hand
    }

    /// Number of roster positions this round covers.
    pub fn num_players(&self) -> usize {
        self.scores.len()
    }

    /// Number of players who actually played this round.
    pub fn group_size(&self) -> usize {
        self.scores.iter().filter(|s| s.is_played()).count()
    }

    /// Roster indexes of the players who played this round.
    pub fn present(&self) -> impl Iterator<Item = usize> + '_ {
        self.scores
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_played())
            .map(|(idx, _)| idx)
    }
}
