//! Bundled game adapters for the generic engine.

pub mod nim;
pub mod tictactoe;
