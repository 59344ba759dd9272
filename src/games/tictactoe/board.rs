//! Board representation, win detection, and the string codec.
//!
//! A board is a 3×3 grid of `Option<Marker>` cells, 9 bytes and `Copy`, so
//! branching the search copies boards freely. The wire form is a 9-character
//! row-major string over `'o'`, `'x'`, and `' '`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// One of the two competitors' marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    O,
    X,
}

impl Marker {
    /// The other player's mark (logical-negation alternation).
    #[must_use]
    pub fn opponent(self) -> Marker {
        match self {
            Marker::O => Marker::X,
            Marker::X => Marker::O,
        }
    }

    fn to_char(self) -> char {
        match self {
            Marker::O => 'o',
            Marker::X => 'x',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A 3×3 tic-tac-toe position. `None` cells are empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Marker>; 3]; 3],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The cell at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Marker> {
        self.cells[row][col]
    }

    /// Set the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Option<Marker>) {
        self.cells[row][col] = cell;
    }

    /// A copy of the board with `player`'s mark at `(row, col)`.
    #[must_use]
    pub fn with_move(&self, row: usize, col: usize, player: Marker) -> Board {
        let mut next = *self;
        next.set(row, col, Some(player));
        next
    }

    /// Are all nine cells occupied?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Coordinates of the empty cells, in row-major order.
    ///
    /// Search enumerates moves in this order, which fixes the tie-break.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.get(row, col).is_none())
    }

    /// Has `player` won on this board?
    #[must_use]
    pub fn did_player_win(&self, player: Marker) -> bool {
        self.did_player_win_horizontal(player)
            || self.did_player_win_vertical(player)
            || self.did_player_win_diagonal(player)
    }

    /// Did `player` complete a row?
    #[must_use]
    pub fn did_player_win_horizontal(&self, player: Marker) -> bool {
        self.cells
            .iter()
            .any(|row| row.iter().all(|&cell| cell == Some(player)))
    }

    /// Did `player` complete a column?
    #[must_use]
    pub fn did_player_win_vertical(&self, player: Marker) -> bool {
        (0..3).any(|col| (0..3).all(|row| self.cells[row][col] == Some(player)))
    }

    /// Did `player` complete either diagonal?
    #[must_use]
    pub fn did_player_win_diagonal(&self, player: Marker) -> bool {
        (0..3).all(|i| self.cells[i][i] == Some(player))
            || (0..3).all(|i| self.cells[i][2 - i] == Some(player))
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parse a 9-character row-major board string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 9 {
            return Err(GameError::InvalidBoardFormat(format!(
                "board must have exactly 9 cells, got {}",
                s.chars().count()
            )));
        }

        let mut board = Board::empty();
        for (i, c) in s.chars().enumerate() {
            let cell = match c {
                'o' => Some(Marker::O),
                'x' => Some(Marker::X),
                ' ' => None,
                other => {
                    return Err(GameError::InvalidBoardFormat(format!(
                        "'{}' is not a valid cell; boards are made of 'o', 'x', and spaces",
                        other
                    )))
                }
            };
            board.set(i / 3, i % 3, cell);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Exact inverse of parsing: nine characters, row-major.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(marker) => write!(f, "{}", marker)?,
                    None => write!(f, " ")?,
                }
            }
        }
        Ok(())
    }
}
