//! Error types.
//!
//! The only recoverable failure in the crate is malformed input to board
//! parsing. Engine contract violations (an adapter that enumerates no moves
//! and never reports a terminal score) are programming errors and panic
//! instead of surfacing here.

use thiserror::Error;

/// Errors surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board string had the wrong length or a disallowed character.
    #[error("invalid board format: {0}")]
    InvalidBoardFormat(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, GameError>;
