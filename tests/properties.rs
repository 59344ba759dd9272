//! Property-based tests for the board codec and the scoring conventions.

use proptest::prelude::*;

use rust_minimax::games::tictactoe::{best_move, solve, TicTacToe};
use rust_minimax::{Board, GameError, GameRules, Marker};

// =============================================================================
// Strategies
// =============================================================================

/// A valid 9-character board string.
fn arb_board_string() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(vec!['o', 'x', ' ']), 9)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A position reached by random legal play from an empty board.
///
/// Plays between `min_moves` and `max_moves` marks, stopping early if the
/// game ends. Returns the board and the mover that placed the last mark.
fn arb_played_position(
    min_moves: usize,
    max_moves: usize,
) -> impl Strategy<Value = (Board, Marker)> {
    (
        proptest::collection::vec(any::<prop::sample::Index>(), 9),
        min_moves..=max_moves,
        any::<bool>(),
    )
        .prop_map(|(picks, target, o_starts)| {
            let mut board = Board::empty();
            let mut player = if o_starts { Marker::O } else { Marker::X };
            let mut placed = 0;

            for pick in picks {
                if placed >= target
                    || board.did_player_win(player.opponent())
                    || board.is_full()
                {
                    break;
                }
                let open: Vec<_> = board.empty_cells().collect();
                let (row, col) = *pick.get(&open);
                board.set(row, col, Some(player));
                placed += 1;
                player = player.opponent();
            }

            // `player` is the side to move; its opponent placed the last mark.
            (board, player.opponent())
        })
}

// =============================================================================
// Codec Laws
// =============================================================================

proptest! {
    #[test]
    fn round_trip_law(s in arb_board_string()) {
        let board: Board = s.parse().unwrap();
        prop_assert_eq!(board.to_string(), s);
    }

    #[test]
    fn wrong_length_is_rejected(s in "[ox ]{0,20}") {
        prop_assume!(s.chars().count() != 9);
        let err = s.parse::<Board>().unwrap_err();
        prop_assert!(matches!(err, GameError::InvalidBoardFormat(_)));
    }

    #[test]
    fn bad_characters_are_rejected(s in arb_board_string(), idx in 0usize..9, c in any::<char>()) {
        prop_assume!(!matches!(c, 'o' | 'x' | ' '));
        let mut chars: Vec<char> = s.chars().collect();
        chars[idx] = c;
        let corrupted: String = chars.into_iter().collect();
        prop_assert!(corrupted.parse::<Board>().is_err());
    }
}

// =============================================================================
// Scoring Laws
// =============================================================================

proptest! {
    /// Terminal states score as exact negations for the two sides; live
    /// states score for neither.
    #[test]
    fn zero_sum_law((board, last_mover) in arb_played_position(0, 9)) {
        let for_mover = TicTacToe.final_score(&board, last_mover);
        let for_other = TicTacToe.final_score(&board, last_mover.opponent());

        match (for_mover, for_other) {
            (Some(a), Some(b)) => prop_assert_eq!(a, -b),
            (None, None) => {}
            other => prop_assert!(false, "one-sided terminal score: {:?}", other),
        }
    }

    /// A full board without a line is a draw for both sides.
    #[test]
    fn lineless_full_board_is_a_draw((board, last_mover) in arb_played_position(9, 9)) {
        let lineless =
            !board.did_player_win(Marker::O) && !board.did_player_win(Marker::X);
        if board.is_full() && lineless {
            prop_assert_eq!(TicTacToe.final_score(&board, last_mover), Some(0));
            prop_assert_eq!(
                TicTacToe.final_score(&board, last_mover.opponent()),
                Some(0)
            );
        }
    }

    /// The functional and in-place solvers agree on who wins.
    #[test]
    fn solvers_agree_on_outcome((board, last_mover) in arb_played_position(4, 7)) {
        // Skip finished games; a solver has nothing to do there.
        if TicTacToe.final_score(&board, last_mover).is_none() {
            let to_move = last_mover.opponent();
            let functional = solve(&board, to_move).score;
            let (_, in_place) = best_move(&board, to_move).unwrap();
            prop_assert_eq!(functional.signum(), in_place.signum());
        }
    }
}
