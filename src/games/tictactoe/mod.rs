//! Tic-tac-toe.
//!
//! Two solvers for the same game:
//! - `rules` plugs the board into the generic engine (pure, copy-per-move)
//! - `solver` is a standalone backtracking search over one mutable board,
//!   with depth-sensitive scores
//!
//! `board` holds the shared representation and the 9-character string codec.

pub mod board;
pub mod rules;
pub mod solver;

pub use board::{Board, Marker};
pub use rules::{solve, TicTacToe};
pub use solver::{best_move, naive_take_turn, take_turn};
