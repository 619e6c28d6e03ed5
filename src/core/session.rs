use super::Round;

/// A maximal run of rounds played back to back on one evening.
///
/// Sessions are delimited on the sheet by an all-absent marker row; the
/// marker itself never becomes a round, so a session is never empty.
/// `sheet::build_sessions` is the only place sessions are materialized
/// from raw rows and it maintains that invariant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Session {
    rounds: Vec<Round>,
}

impl Session {
    /// Build a session from consecutive rounds.
    pub fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    /// The rounds of this session in play order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds dealt in this session.
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }
}
