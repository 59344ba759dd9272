//! Core minimax search algorithm.
//!
//! Exhaustive negamax: every move's score is either the terminal score of
//! the state it produces, or the negation of the opponent's best score from
//! there. The maximum over candidates is the value of the position.

use std::time::Instant;

use tracing::debug;

use crate::core::Score;

use super::rules::GameRules;
use super::stats::SearchStats;

/// Result of a solved position: the optimal move, the state it produces,
/// and its score from the mover's perspective.
#[derive(Clone, Debug)]
pub struct SearchOutcome<G: GameRules> {
    /// The best move found (first among equals in enumeration order).
    pub best_move: G::Move,

    /// The state the best move produces.
    pub state: G::State,

    /// Score of the best move for the player who made it.
    pub score: Score,
}

/// Main minimax search context.
///
/// Generic over the rules type. Owns the rules value and collects
/// [`SearchStats`] across one `solve` call.
pub struct MinimaxSearch<G: GameRules> {
    /// The game rules.
    rules: G,

    /// Search statistics.
    stats: SearchStats,
}

impl<G: GameRules> MinimaxSearch<G> {
    /// Create a new search context.
    pub fn new(rules: G) -> Self {
        Self {
            rules,
            stats: SearchStats::default(),
        }
    }

    /// Find the optimal move for `player` from `state`.
    ///
    /// Runs to completion: the underlying games have small finite trees, so
    /// there is no cutoff or cancellation. Scores are zero-sum and reported
    /// from `player`'s perspective.
    ///
    /// # Panics
    ///
    /// Panics if the adapter enumerates no moves from a state it never
    /// reported as terminal. That breaks the win-or-draw completeness
    /// contract and indicates a bug in the adapter, not a runtime condition
    /// worth recovering from.
    pub fn solve(&mut self, state: &G::State, player: G::Player) -> SearchOutcome<G> {
        self.stats.reset();
        let start = Instant::now();

        let outcome = self.solve_at(state, player, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            best_move = ?outcome.best_move,
            score = outcome.score,
            states = self.stats.states_visited,
            "search complete"
        );
        outcome
    }

    fn solve_at(&mut self, state: &G::State, player: G::Player, depth: u16) -> SearchOutcome<G> {
        self.stats.states_visited += 1;
        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }

        let mut best: Option<SearchOutcome<G>> = None;

        for (mov, next_state) in self.rules.next_moves(state, player) {
            let score = match self.rules.final_score(&next_state, player) {
                Some(score) => {
                    self.stats.terminal_states += 1;
                    score
                }
                // Not over: the opponent's best reply, seen from our side.
                None => {
                    let opponent = self.rules.next_player(player);
                    -self.solve_at(&next_state, opponent, depth + 1).score
                }
            };

            if depth == 0 {
                debug!(?player, ?mov, score, "candidate move");
            }

            // Strict comparison keeps the first move on ties.
            let improved = match &best {
                Some(current) => score > current.score,
                None => true,
            };
            if improved {
                best = Some(SearchOutcome {
                    best_move: mov,
                    state: next_state,
                    score,
                });
            }
        }

        best.unwrap_or_else(|| {
            panic!(
                "no legal moves and no terminal score at {:?} for {:?}; \
                 adapter violates the win-or-draw contract",
                state, player
            )
        })
    }

    /// Statistics from the most recent `solve` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The rules value.
    pub fn rules(&self) -> &G {
        &self.rules
    }
}
