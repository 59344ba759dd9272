//! # rust-minimax
//!
//! A game-agnostic minimax engine for small deterministic, perfect-information,
//! zero-sum two-player games, bundled with two reference games: tic-tac-toe
//! and a Nim-style subtraction game.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Core**: the engine knows nothing about boards or piles.
//!    Games plug in via the `GameRules` trait (move enumeration, terminal
//!    scoring, turn alternation).
//!
//! 2. **Exhaustive and Exact**: the search visits the full game tree and
//!    returns provably optimal moves. No pruning, no caching, no heuristics.
//!
//! 3. **Value Semantics**: candidate states are copies; exploring a branch
//!    never disturbs the caller's state. The one exception is the in-place
//!    tic-tac-toe solver, which mutates a single board under a strict
//!    undo-on-backtrack discipline.
//!
//! ## Modules
//!
//! - `core`: score type, error taxonomy
//! - `engine`: the generic minimax search
//! - `games`: tic-tac-toe and Nim adapters

pub mod core;
pub mod engine;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameError, Result, Score};

pub use crate::engine::{GameRules, MinimaxSearch, MoveList, SearchOutcome, SearchStats};

pub use crate::games::nim::Nim;
pub use crate::games::tictactoe::{Board, Marker, TicTacToe};
