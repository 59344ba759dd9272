//! Generic minimax search.
//!
//! Games implement [`GameRules`] and hand it to [`MinimaxSearch`], which
//! explores the full game tree depth-first and returns the optimal move for
//! the player to act.

pub mod rules;
pub mod search;
pub mod stats;

pub use rules::{GameRules, MoveList};
pub use search::{MinimaxSearch, SearchOutcome};
pub use stats::SearchStats;
