//! Tic-tac-toe adapter for the generic engine.
//!
//! Moves are `(row, col)` coordinates; each candidate state is a copy of the
//! board with the mover's mark placed.

use crate::core::Score;
use crate::engine::{GameRules, MinimaxSearch, MoveList, SearchOutcome};

use super::board::{Board, Marker};

/// The tic-tac-toe rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl GameRules for TicTacToe {
    type State = Board;
    type Move = (usize, usize);
    type Player = Marker;

    fn next_moves(&self, board: &Board, player: Marker) -> MoveList<Self> {
        board
            .empty_cells()
            .map(|(row, col)| ((row, col), board.with_move(row, col, player)))
            .collect()
    }

    /// Score for `player`, the mover that produced `board`.
    ///
    /// The opponent-win check comes first: a line held by the side to move
    /// next means the game ended a ply earlier and this branch is scored
    /// from the loser's side, letting the engine's negation propagate it.
    /// The mover's own line must still be checked before the draw test, or
    /// a win on the ninth mark would be scored as a draw.
    fn final_score(&self, board: &Board, player: Marker) -> Option<Score> {
        if board.did_player_win(player.opponent()) {
            Some(-1)
        } else if board.did_player_win(player) {
            Some(1)
        } else if board.is_full() {
            Some(0)
        } else {
            None
        }
    }

    fn next_player(&self, player: Marker) -> Marker {
        player.opponent()
    }
}

/// Solve a board for the player to move.
pub fn solve(board: &Board, player: Marker) -> SearchOutcome<TicTacToe> {
    MinimaxSearch::new(TicTacToe).solve(board, player)
}
