//! Position notation.
//!
//! A compact single-line encoding of a board and the side to move, in the
//! spirit of chess FEN:
//!
//! `<top row>/<middle row>/<bottom row> <side to move>`
//!
//! Each row holds one character per column: `x`, `o`, or `.` for a blank
//! cell. The side to move is `x` or `o`. An empty board with X to move is
//! `..../..../.... x`.

use crate::board::{GameBoard, Piece, Player, COLS, ROWS};

/// Errors that can occur while parsing position notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected '<rows> <side to move>', got '{0}'")]
    MissingSideToMove(String),

    #[error("expected 3 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row '{0}' must have 4 cells")]
    WrongRowLength(String),

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("invalid side to move: '{0}'")]
    InvalidSideToMove(String),

    #[error("piece at row {row}, column {column} has a blank cell below it")]
    FloatingPiece { row: usize, column: usize },
}

/// A decoded position.
///
/// Rows are held bottom-up, matching the row coordinates of
/// `GameBoard::piece_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub rows: [[Piece; COLS]; ROWS],
    pub turn: Player,
}

impl Position {
    /// Returns the piece at bottom-up coordinates, or `Piece::Invalid` off
    /// the board.
    pub fn piece_at(&self, row: usize, column: usize) -> Piece {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(Piece::Invalid)
    }

    /// Returns true if this position shows the same cells and side to move
    /// as `board`.
    pub fn matches(&self, board: &GameBoard) -> bool {
        self.turn == board.turn() && board.rows_bottom_up().eq(self.rows.iter())
    }
}

/// Encodes a board as position notation.
pub fn encode_position(board: &GameBoard) -> String {
    let mut result = String::with_capacity(ROWS * (COLS + 1) + 2);

    for (i, row) in board.rows_bottom_up().rev().enumerate() {
        if i > 0 {
            result.push('/');
        }
        // Stored cells are never Invalid.
        result.extend(row.iter().filter_map(|p| p.notation_char()));
    }

    result.push(' ');
    result.push_str(board.turn().name());
    result
}

/// Parses position notation.
///
/// Rejects positions that could not arise from dropping pieces, i.e. a
/// mark resting on a blank cell.
pub fn parse_position(s: &str) -> Result<Position, NotationError> {
    let (rows_str, side) = s
        .trim()
        .split_once(' ')
        .ok_or_else(|| NotationError::MissingSideToMove(s.to_string()))?;

    let turn = match side.trim() {
        "x" => Player::X,
        "o" => Player::O,
        other => return Err(NotationError::InvalidSideToMove(other.to_string())),
    };

    let row_strs: Vec<&str> = rows_str.split('/').collect();
    if row_strs.len() != ROWS {
        return Err(NotationError::WrongRowCount(row_strs.len()));
    }

    let mut rows = [[Piece::Blank; COLS]; ROWS];
    // Notation lists the top row first.
    for (row, row_str) in rows.iter_mut().rev().zip(&row_strs) {
        if row_str.chars().count() != COLS {
            return Err(NotationError::WrongRowLength(row_str.to_string()));
        }
        for (cell, c) in row.iter_mut().zip(row_str.chars()) {
            *cell = parse_cell(c)?;
        }
    }

    for row in 1..ROWS {
        for column in 0..COLS {
            if rows[row][column] != Piece::Blank && rows[row - 1][column] == Piece::Blank {
                return Err(NotationError::FloatingPiece { row, column });
            }
        }
    }

    Ok(Position { rows, turn })
}

fn parse_cell(c: char) -> Result<Piece, NotationError> {
    match c {
        'x' => Ok(Piece::X),
        'o' => Ok(Piece::O),
        '.' => Ok(Piece::Blank),
        _ => Err(NotationError::InvalidCell(c)),
    }
}
