//! Shared primitives: the score type and the error taxonomy.

pub mod error;

pub use error::{GameError, Result};

/// Game-theoretic value of a position, totally ordered and zero-sum:
/// a state worth `s` to one player is worth `-s` to the opponent.
///
/// The functional adapters use `-1`/`0`/`1`; the in-place tic-tac-toe
/// solver scales wins by remaining depth (up to `9`).
pub type Score = i32;
