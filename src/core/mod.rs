//! The core data model for Rommé score sheets.
//!
//! Everything in here is a plain immutable value type: a [`Score`] for one
//! player in one round, a [`Round`] of scores with its shared hand flag, a
//! [`Session`] of consecutive rounds, and the [`Player`] roster entries
//! used to interpret round scores positionally.
//!
//! All of the types hash on their full content so the analysis layer can
//! key its result cache structurally.

mod player;
mod round;
mod score;
mod session;

pub use player::Player;
pub use round::Round;
pub use score::Score;
pub use session::Session;
