//! Piece and player types.
//!
//! `Piece` is what a cell (or a query) can hold; `Player` is whose turn it
//! is. A player always maps onto one of the two mark pieces.

use serde::{Deserialize, Serialize};

/// The contents of a board cell, or the result of a board operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Blank,
    X,
    O,
    /// Returned for out-of-range queries; never stored on the board.
    Invalid,
}

impl Piece {
    /// Returns the display character for this piece.
    pub const fn as_char(self) -> char {
        match self {
            Piece::Blank => ' ',
            Piece::X => 'X',
            Piece::O => 'O',
            Piece::Invalid => '?',
        }
    }

    /// Returns the single-character position-notation abbreviation.
    ///
    /// `Invalid` has no notation form since it never occupies a cell.
    pub const fn notation_char(self) -> Option<char> {
        match self {
            Piece::Blank => Some('.'),
            Piece::X => Some('x'),
            Piece::O => Some('o'),
            Piece::Invalid => None,
        }
    }

    /// Returns the lowercase protocol name.
    pub const fn name(self) -> &'static str {
        match self {
            Piece::Blank => "blank",
            Piece::X => "x",
            Piece::O => "o",
            Piece::Invalid => "invalid",
        }
    }

    /// Returns the player owning this piece, if it is a mark.
    pub const fn player(self) -> Option<Player> {
        match self {
            Piece::X => Some(Player::X),
            Piece::O => Some(Player::O),
            Piece::Blank | Piece::Invalid => None,
        }
    }
}

/// The side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the other player.
    pub const fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the piece this player drops.
    pub const fn piece(self) -> Piece {
        match self {
            Player::X => Piece::X,
            Player::O => Piece::O,
        }
    }

    pub const fn name(self) -> &'static str {
        self.piece().name()
    }
}

impl From<Player> for Piece {
    fn from(player: Player) -> Piece {
        player.piece()
    }
}
