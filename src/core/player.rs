/// One entry of the roster.
///
/// The roster is an ordered slice of players; a player's position in that
/// slice is the index used to read their score out of every round. The
/// `column` is the score-sheet column identifier the storage side uses
/// for this player.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Player {
    /// Display name, stable across the dataset.
    pub name: String,
    /// Score-sheet column identifier.
    pub column: String,
}

impl Player {
    /// Create a roster entry.
    pub fn new(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
        }
    }
}
