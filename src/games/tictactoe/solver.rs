//! Self-contained in-place tic-tac-toe solver.
//!
//! Functionally equivalent to running the generic engine with the
//! [`super::rules::TicTacToe`] adapter, but built on the opposite
//! state-ownership discipline: one shared board is mutated through the
//! recursion and every tentative mark is erased before the next candidate
//! is tried (undo-on-backtrack). Wins are scored `9 - depth`, which prefers
//! the fastest win and the slowest loss among otherwise equal outcomes.

use smallvec::SmallVec;

use crate::core::Score;

use super::board::{Board, Marker};

/// How a tentative mark resolved, recorded before the mark is erased.
enum Verdict {
    Win,
    Draw,
    Reply(Score),
}

/// Best move for `player` and its score, or `None` on a full board.
///
/// Scores: `9 - depth` of the winning mark for a forced win, `0` for a
/// draw, negative for a forced loss. The caller's board is never modified;
/// the search runs on a private copy.
#[must_use]
pub fn best_move(board: &Board, player: Marker) -> Option<((usize, usize), Score)> {
    if board.is_full() {
        return None;
    }
    let mut scratch = *board;
    Some(search(&mut scratch, player, 0))
}

/// The board after `player`'s optimal move, as a new copy.
///
/// # Panics
///
/// Panics if the board is already full; there is no turn to take.
#[must_use]
pub fn take_turn(board: &Board, player: Marker) -> Board {
    match best_move(board, player) {
        Some(((row, col), _)) => board.with_move(row, col, player),
        None => panic!("take_turn called on a full board: {:?}", board.to_string()),
    }
}

/// The board after `player` takes the first open cell. Baseline opponent.
#[must_use]
pub fn naive_take_turn(board: &Board, player: Marker) -> Board {
    match board.empty_cells().next() {
        Some((row, col)) => board.with_move(row, col, player),
        None => *board,
    }
}

/// Backtracking search over one shared board.
///
/// Precondition: at least one cell is open. Each candidate mark is placed,
/// evaluated (recursing while the cell is set), and erased at a single
/// restore point before any early return, so sibling branches and callers
/// never observe a dangling mark.
fn search(board: &mut Board, player: Marker, depth: Score) -> ((usize, usize), Score) {
    let mut least: Option<((usize, usize), Score)> = None;

    let open: SmallVec<[(usize, usize); 9]> = board.empty_cells().collect();
    for (row, col) in open {
        board.set(row, col, Some(player));

        let verdict = if board.did_player_win(player) {
            Verdict::Win
        } else if board.is_full() {
            // The last open cell and nobody won.
            Verdict::Draw
        } else {
            Verdict::Reply(search(board, player.opponent(), depth + 1).1)
        };

        board.set(row, col, None);

        match verdict {
            Verdict::Win => return ((row, col), 9 - depth),
            Verdict::Draw => return ((row, col), 0),
            Verdict::Reply(reply) => {
                // Strict comparison keeps the first cell on ties.
                if least.map_or(true, |(_, s)| reply < s) {
                    least = Some(((row, col), reply));
                }
            }
        }
    }

    match least {
        // Zero-sum: the opponent's best reply, negated, is our score.
        Some((cell, reply)) => (cell, -reply),
        None => unreachable!("search entered with no open cells"),
    }
}
