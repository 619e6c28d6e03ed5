//! `rs_rommee` is a library for analyzing Rommé score sheets.
//!
//! A group that plays Rommé regularly keeps a running sheet: one column
//! per player, one row per dealt hand, the winner at zero and everyone
//! else down the points left in their hand, doubled when the winner went
//! out with a Rommé hand. An all-blank row closes out the evening. This
//! crate turns those sheets into statistics:
//!
//! - [`core`](crate::core) holds the data model. A
//!   [`Score`](crate::core::Score) is either an explicit absence or the
//!   points a player was left holding, a [`Round`](crate::core::Round) is
//!   one dealt hand with its shared hand flag, and a
//!   [`Session`](crate::core::Session) is one evening's run of rounds.
//! - [`sheet`] validates raw tabular rows and splits them into sessions.
//!   Malformed rows are rejected here, before any statistics run.
//! - [`analysis`] computes the numbers: win rates, streaks, point
//!   totals, per-session breakdowns, global rankings, and win-chance
//!   figures normalized across different table sizes. The
//!   [`analysis::Analyzer`] caches finished reports by the structural
//!   content of their inputs.
//!
//! The engine itself does no I/O: storage, rendering, and anything else
//! with side effects live with the callers.

pub mod analysis;
pub mod core;
pub mod sheet;
