//! Rules trait for game implementations.
//!
//! A game parameterizes the engine with three things:
//! - which moves are legal from a state, and what state each produces
//! - whether a state is terminal, and its score if so
//! - whose turn comes next

use std::fmt::Debug;

use smallvec::SmallVec;

use crate::core::Score;

/// Legal moves paired with the states they produce.
///
/// Inline capacity of 9 covers the widest branching factor of the bundled
/// games without heap allocation.
pub type MoveList<G> =
    SmallVec<[(<G as GameRules>::Move, <G as GameRules>::State); 9]>;

/// Rules trait.
///
/// Games implement this trait to drive [`crate::engine::MinimaxSearch`].
///
/// ## Implementation Notes
///
/// - `next_moves`: return an empty list only when no legal moves exist.
///   The engine does not inspect states itself; termination is detected
///   through this method and `final_score` alone.
/// - `next_moves`: enumeration order must be deterministic. Ties between
///   equal-scoring moves go to the first one enumerated, so a nondeterministic
///   order makes search results irreproducible.
/// - `final_score`: called on each *candidate resulting state*, with `player`
///   being the mover that produced it. Return `None` while the game is live.
/// - A state with no legal moves must have a `final_score`; an adapter that
///   violates this panics the search.
pub trait GameRules {
    /// Complete snapshot of a position. Candidate states are copies, so
    /// exploring a branch never disturbs the original.
    type State: Clone + Debug;

    /// Key identifying one transition out of a state.
    type Move: Clone + Debug;

    /// Identifier for one of the two competitors.
    type Player: Copy + Debug;

    /// Enumerate `player`'s legal moves from `state` and the state each
    /// one produces.
    fn next_moves(&self, state: &Self::State, player: Self::Player) -> MoveList<Self>;

    /// Score of `state` for `player` (the mover that produced it) if the
    /// game is over there, or `None` if play continues.
    fn final_score(&self, state: &Self::State, player: Self::Player) -> Option<Score>;

    /// Turn alternation rule.
    fn next_player(&self, player: Self::Player) -> Self::Player;
}
