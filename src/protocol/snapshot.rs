//! JSON board snapshots.
//!
//! A snapshot is a self-describing view of a board for frontends that
//! prefer structured data over the position notation.

use serde::{Deserialize, Serialize};

use crate::board::{GameBoard, Piece, Player, Scoring};

/// Serializable view of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Rows bottom-up, one display character per cell.
    pub rows: Vec<String>,
    pub turn: Player,
    pub scoring: Scoring,
    /// `invalid` while the game is in progress.
    pub state: Piece,
}

impl Snapshot {
    pub fn of(board: &GameBoard) -> Self {
        Snapshot {
            rows: board
                .rows_bottom_up()
                .map(|row| row.iter().map(|p| p.as_char()).collect())
                .collect(),
            turn: board.turn(),
            scoring: board.scoring(),
            state: board.game_state(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
