//! Board representation and game-state types.
//!
//! Contains the piece and player types, the line-scoring rules, and the
//! game board itself.

pub mod piece;
pub mod scoring;
pub mod state;

pub use piece::{Piece, Player};
pub use scoring::{LineTally, Scoring};
pub use state::{GameBoard, COLS, ROWS};
