//! Turning raw score-sheet rows into the typed model.
//!
//! The storage side hands over one [`RawRow`] per sheet row: one optional
//! score per roster column plus the hand flag. This module is the only
//! place those rows become [`Round`]s and [`Session`]s, and it is where
//! malformed input is rejected, so the analysis layer can assume a
//! structurally valid model.
//!
//! Two row shapes exist on a sheet:
//!
//! * an all-null row is a session delimiter. It terminates the session in
//!   progress and is never materialized as a round.
//! * any other row is a dealt round. Null columns are absences, and the
//!   hand flag drives the score doubling applied by [`Round::new`].
//!
//! # Example
//!
//! ```
//! use rs_rommee::sheet::{RawRow, build_sessions};
//!
//! let rows = vec![
//!     RawRow::new(vec![Some(10), Some(0), Some(15)], false),
//!     RawRow::new(vec![Some(0), Some(8), Some(7)], false),
//!     RawRow::new(vec![None, None, None], false),
//!     RawRow::new(vec![Some(0), None, Some(22)], false),
//! ];
//!
//! let sessions = build_sessions(&rows, 3).unwrap();
//! assert_eq!(sessions.len(), 2);
//! assert_eq!(sessions[0].num_rounds(), 2);
//! assert_eq!(sessions[1].num_rounds(), 1);
//! ```

use thiserror::Error;

use crate::core::{Round, Score, Session};

/// Errors raised while building the model from raw sheet rows.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum SheetError {
    #[error("The roster is empty, there are no columns to read scores from")]
    EmptyRoster,

    #[error("Row {row} has {found} score columns but the roster has {expected}")]
    RosterMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// One raw score-sheet row as the storage collaborator supplies it.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct RawRow {
    /// One recorded score per roster column, in roster order. `None`
    /// where the column was left blank.
    pub scores: Vec<Option<u32>>,
    /// Whether this round was won with a Rommé hand.
    pub hand: bool,
}

impl RawRow {
    /// Create a raw row.
    pub fn new(scores: Vec<Option<u32>>, hand: bool) -> Self {
        Self { scores, hand }
    }

    /// True if every column is blank, which marks a session boundary.
    pub fn is_delimiter(&self) -> bool {
        self.scores.iter().all(|s| s.is_none())
    }
}

/// Split raw rows into sessions of constructed rounds.
///
/// Delimiter rows terminate the session in progress; consecutive or
/// leading delimiters produce no empty sessions, and an unterminated
/// trailing run of rounds still forms a final session. Every row is
/// validated against the roster width before any round is built.
pub fn build_sessions(rows: &[RawRow], roster_len: usize) -> Result<Vec<Session>, SheetError> {
    if roster_len == 0 {
        return Err(SheetError::EmptyRoster);
    }

    let mut sessions = Vec::new();
    let mut current: Vec<Round> = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        if row.scores.len() != roster_len {
            return Err(SheetError::RosterMismatch {
                row: row_idx,
                expected: roster_len,
                found: row.scores.len(),
            });
        }

        if row.is_delimiter() {
            if !current.is_empty() {
                sessions.push(Session::new(std::mem::take(&mut current)));
            }
        } else {
            let scores = row
                .scores
                .iter()
                .map(|s| match s {
                    Some(points) => Score::Played(*points),
                    None => Score::Absent,
                })
                .collect();
            current.push(Round::new(scores, row.hand));
        }
    }

    if !current.is_empty() {
        sessions.push(Session::new(current));
    }

    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_splits_sessions() {
        let rows = vec![
            RawRow::new(vec![Some(10), Some(0), Some(15)], false),
            RawRow::new(vec![Some(0), Some(8), Some(7)], false),
            RawRow::new(vec![None, None, None], false),
            RawRow::new(vec![Some(0), None, Some(22)], false),
            RawRow::new(vec![None, None, None], false),
        ];

        let sessions = build_sessions(&rows, 3).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].num_rounds(), 2);
        assert_eq!(sessions[1].num_rounds(), 1);
    }

    #[test]
    fn test_trailing_rounds_form_a_session() {
        let rows = vec![
            RawRow::new(vec![Some(0), Some(4)], false),
            RawRow::new(vec![Some(3), Some(0)], false),
        ];

        let sessions = build_sessions(&rows, 2).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].num_rounds(), 2);
    }

    #[test]
    fn test_consecutive_delimiters_make_no_empty_sessions() {
        let rows = vec![
            RawRow::new(vec![None, None], false),
            RawRow::new(vec![Some(0), Some(4)], false),
            RawRow::new(vec![None, None], false),
            RawRow::new(vec![None, None], false),
            RawRow::new(vec![Some(6), Some(0)], false),
        ];

        let sessions = build_sessions(&rows, 2).unwrap();
        assert_eq!(sessions.len(), 2);
        for session in &sessions {
            assert!(session.num_rounds() > 0);
        }
    }

    #[test]
    fn test_nulls_become_absences() {
        let rows = vec![RawRow::new(vec![Some(0), None, Some(22)], false)];

        let sessions = build_sessions(&rows, 3).unwrap();
        let round = &sessions[0].rounds()[0];
        assert_eq!(round.score(0), Score::Played(0));
        assert_eq!(round.score(1), Score::Absent);
        assert_eq!(round.score(2), Score::Played(22));
    }

    #[test]
    fn test_hand_flag_doubles_on_construction() {
        let rows = vec![RawRow::new(vec![Some(0), Some(8), Some(7)], true)];

        let sessions = build_sessions(&rows, 3).unwrap();
        let round = &sessions[0].rounds()[0];
        assert_eq!(round.score(0), Score::Played(0));
        assert_eq!(round.score(1), Score::Played(16));
        assert_eq!(round.score(2), Score::Played(14));
        assert!(round.hand());
    }

    #[test]
    fn test_row_width_is_validated() {
        let rows = vec![
            RawRow::new(vec![Some(0), Some(8), Some(7)], false),
            RawRow::new(vec![Some(0), Some(8)], false),
        ];

        let err = build_sessions(&rows, 3).unwrap_err();
        assert_eq!(
            err,
            SheetError::RosterMismatch {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let err = build_sessions(&[], 0).unwrap_err();
        assert_eq!(err, SheetError::EmptyRoster);
    }

    #[test]
    fn test_no_rows_is_fine() {
        let sessions = build_sessions(&[], 4).unwrap();
        assert!(sessions.is_empty());
    }
}
