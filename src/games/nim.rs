//! Nim-style subtraction game.
//!
//! The game starts with 13 objects. Players take turns removing 1, 2, or 3
//! objects from the pile, and the player that takes the last object loses.
//!
//! States are pile sizes, players are the integers `+1` and `-1` with
//! negation as the alternation rule. Every game terminates because the pile
//! strictly decreases on each move; there are no draws.

use crate::core::Score;
use crate::engine::{GameRules, MinimaxSearch, MoveList, SearchOutcome};

/// Conventional opening pile size.
pub const STARTING_PILE: u32 = 13;

/// Most objects a player may remove in one move.
pub const MAX_TAKE: u32 = 3;

/// The subtraction-game rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nim;

impl GameRules for Nim {
    type State = u32;
    type Move = u32;
    type Player = i8;

    fn next_moves(&self, state: &u32, _player: i8) -> MoveList<Self> {
        let pile = *state;
        (1..=pile.min(MAX_TAKE)).map(|take| (take, pile - take)).collect()
    }

    fn final_score(&self, state: &u32, _player: i8) -> Option<Score> {
        // The mover who emptied the pile took the last object and loses.
        if *state == 0 {
            Some(-1)
        } else {
            None
        }
    }

    fn next_player(&self, player: i8) -> i8 {
        -player
    }
}

/// Solve a pile for the player to move.
pub fn solve(pile: u32, player: i8) -> SearchOutcome<Nim> {
    MinimaxSearch::new(Nim).solve(&pile, player)
}
