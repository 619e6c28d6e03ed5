//! Small helpers for building datasets in tests.

use crate::core::{Player, Round, Score, Session};

/// Build a round from optional raw scores, `None` meaning absent.
pub(crate) fn round(scores: &[Option<u32>], hand: bool) -> Round {
    Round::new(
        scores
            .iter()
            .map(|score| match score {
                Some(points) => Score::Played(*points),
                None => Score::Absent,
            })
            .collect(),
        hand,
    )
}

/// Build a roster with generated column names.
pub(crate) fn roster(names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| Player::new(*name, format!("player{}", idx + 1)))
        .collect()
}

/// A small three-player dataset spanning two sessions, with a hand round,
/// an absence, and an uneven win distribution.
pub(crate) fn demo_sessions() -> (Vec<Session>, Vec<Player>) {
    let players = roster(&["Alice", "Bob", "Cara"]);
    let sessions = vec![
        Session::new(vec![
            round(&[Some(10), Some(0), Some(15)], false),
            round(&[Some(0), Some(8), Some(7)], false),
            round(&[Some(0), Some(12), Some(4)], true),
        ]),
        Session::new(vec![
            round(&[Some(0), None, Some(22)], false),
            round(&[Some(6), None, Some(0)], false),
        ]),
    ];
    (sessions, players)
}
