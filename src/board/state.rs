//! Game board state.
//!
//! Holds the 3x4 grid, the side to move, and the scoring rule used once the
//! grid is full.
//!
//! Callers address rows bottom-up: row 0 is where a dropped piece lands
//! first. Storage keeps the top row at index 0, so `piece_at` remaps the
//! caller's row with `|row - (ROWS - 1)|`.

use std::fmt;

use log::debug;

use super::piece::{Piece, Player};
use super::scoring::{LineTally, Scoring};

/// Number of rows on the board.
pub const ROWS: usize = 3;
/// Number of columns on the board.
pub const COLS: usize = 4;

/// Complete state of one game.
///
/// Fixed-size storage keeps the board allocation-free and `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameBoard {
    /// `cells[0]` is the top row, `cells[ROWS - 1]` the bottom row.
    cells: [[Piece; COLS]; ROWS],
    turn: Player,
    scoring: Scoring,
}

impl GameBoard {
    /// Creates an empty board with X to move and the default scoring rule.
    pub fn new() -> Self {
        Self::with_scoring(Scoring::default())
    }

    /// Creates an empty board with X to move and the given scoring rule.
    pub fn with_scoring(scoring: Scoring) -> Self {
        GameBoard {
            cells: [[Piece::Blank; COLS]; ROWS],
            turn: Player::X,
            scoring,
        }
    }

    /// Clears every cell and gives the move back to X. The scoring rule is
    /// kept.
    pub fn reset(&mut self) {
        self.cells = [[Piece::Blank; COLS]; ROWS];
        self.turn = Player::X;
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    pub fn set_scoring(&mut self, scoring: Scoring) {
        self.scoring = scoring;
    }

    /// Drops the current player's piece into `column` and passes the turn.
    ///
    /// Returns the placed piece, `Piece::Blank` if the column is full, or
    /// `Piece::Invalid` if the column is off the board. The turn passes in
    /// every case: a move that places nothing forfeits the player's turn.
    pub fn drop_piece(&mut self, column: i32) -> Piece {
        let mover = self.turn;
        self.turn = mover.other();

        let Some(col) = checked_index(column, COLS) else {
            debug!("column {} is off the board; {} forfeits", column, mover.name());
            return Piece::Invalid;
        };

        // Lowest blank cell is the highest storage index.
        let Some(row) = (0..ROWS).rev().find(|&r| self.cells[r][col] == Piece::Blank) else {
            debug!("column {} is full; {} forfeits", col, mover.name());
            return Piece::Blank;
        };

        self.cells[row][col] = mover.piece();
        mover.piece()
    }

    /// Returns the piece at caller coordinates (row 0 is the bottom), or
    /// `Piece::Invalid` if either coordinate is off the board.
    pub fn piece_at(&self, row: i32, column: i32) -> Piece {
        match (checked_index(row, ROWS), checked_index(column, COLS)) {
            (Some(row), Some(col)) => self.cells[row.abs_diff(ROWS - 1)][col],
            _ => Piece::Invalid,
        }
    }

    /// Returns true if no cell is blank.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&p| p != Piece::Blank)
    }

    /// Returns `Piece::Invalid` while the game is in progress, otherwise the
    /// winner (`X` or `O`) or `Piece::Blank` for a tie.
    ///
    /// A game ends only when the board is full. Lines are scored rows first
    /// (top to bottom) and then columns (left to right), which matters for
    /// order-sensitive rules such as `Scoring::LeaderReset`.
    pub fn game_state(&self) -> Piece {
        if !self.is_full() {
            return Piece::Invalid;
        }
        let result = self.scoring.decide(self.line_tallies());
        debug!("full board scored {} under {}", result.name(), self.scoring.name());
        result
    }

    /// Tallies of every row (storage order) followed by every column.
    pub fn line_tallies(&self) -> impl Iterator<Item = LineTally> + '_ {
        let rows = self.cells.iter().map(|row| LineTally::of(row.iter().copied()));
        let cols = (0..COLS).map(move |c| LineTally::of(self.cells.iter().map(move |row| row[c])));
        rows.chain(cols)
    }

    /// Iterates caller rows from the bottom (row 0) upward.
    pub fn rows_bottom_up(&self) -> impl DoubleEndedIterator<Item = &[Piece; COLS]> {
        self.cells.iter().rev()
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid top row first, one `|`-separated line per row.
impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write!(f, "|")?;
            for piece in row {
                write!(f, "{}|", piece.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn checked_index(value: i32, bound: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&i| i < bound)
}
